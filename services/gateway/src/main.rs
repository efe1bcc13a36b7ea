use clap::Parser;
use gateway::{AppState, GatewayConfig, create_router};
use persistence::SqliteStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::parse();
    tracing::info!("Starting branch directory gateway");

    let store = SqliteStore::open(&config.store_config()).await?;
    let state = AppState::new(Arc::new(store.clone()));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(config.bind).await?;

    tracing::info!("Listening on {}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Gateway stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
