use clap::Parser;
use ingestion::Ingester;
use persistence::{SqliteStore, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Load a bank branch CSV file into the directory store.
#[derive(Debug, Parser)]
#[command(name = "ingest-branches", version)]
struct Args {
    /// Source file with columns bank_id, bank_name, ifsc, branch, address, city, district, state
    #[arg(default_value = "data/bank_branches.csv")]
    csv: PathBuf,

    #[arg(long, env = "DATABASE_URL", default_value = StoreConfig::DEFAULT_URL)]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Single connection: ingestion is one exclusive writer
    let config = StoreConfig {
        database_url: args.database_url,
        max_connections: 1,
    };
    let store = SqliteStore::open(&config).await?;
    let ingester = Ingester::new(store);

    let result = ingester.ingest_path(&args.csv).await;
    ingester.store().close().await;

    match result {
        Ok(report) => {
            tracing::info!(
                banks = report.banks_inserted,
                branches = report.branches_inserted,
                skipped = report.branches_skipped,
                "Import complete"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Import aborted, no rows were written");
            Err(err.into())
        }
    }
}
