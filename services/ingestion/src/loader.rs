//! Idempotent batch loader
//!
//! Each run is all-or-nothing: rows are applied inside one
//! [`ImportBatch`](persistence::ImportBatch) and any error drops the batch,
//! rolling back every insert made so far.
//!
//! File and CSV reads happen on the blocking pool; decoded rows stream to
//! the async writer over a bounded channel.

use crate::record::{missing_columns, SourceRow};
use persistence::{SqliteStore, StoreError};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{self, JoinError};
use tracing::{debug, error, info, warn};
use types::bank::Bank;
use types::branch::Branch;
use types::ids::BankId;

/// Decoded rows buffered between the reader and the writer
const ROW_BUFFER: usize = 1024;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("Malformed source at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid bank_id {value:?} at line {line}")]
    InvalidBankId { line: u64, value: String },

    #[error("Conflict at line {line}: {reason}")]
    Conflict { line: u64, reason: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Reader task failed: {0}")]
    Reader(#[from] JoinError),
}

// ── Report ──────────────────────────────────────────────────────────

/// Outcome of a committed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Data rows read from the source.
    pub rows: u64,
    pub banks_inserted: u64,
    pub branches_inserted: u64,
    /// Rows whose IFSC was already stored or appeared earlier in the file.
    pub branches_skipped: u64,
}

// ── Decoding ────────────────────────────────────────────────────────

struct DecodedRow {
    line: u64,
    bank: Bank,
    branch: Branch,
}

type RowReader<R> = (csv::Reader<R>, csv::StringRecord);

/// Read and check the header line.
fn open_reader<R: Read>(source: R) -> Result<RowReader<R>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv { line: 1, source })?
        .clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        error!(missing = ?missing, "Source file is missing required columns");
        return Err(IngestError::MissingColumns(missing));
    }
    Ok((reader, headers))
}

fn decode_row(
    record: Result<csv::StringRecord, csv::Error>,
    headers: &csv::StringRecord,
) -> Result<DecodedRow, IngestError> {
    let record = record.map_err(|source| IngestError::Csv {
        line: source.position().map_or(0, |p| p.line()),
        source,
    })?;
    let line = record.position().map_or(0, |p| p.line());
    let row: SourceRow = record
        .deserialize(Some(headers))
        .map_err(|source| IngestError::Csv { line, source })?;
    let (bank, branch) = row
        .into_records()
        .map_err(|value| IngestError::InvalidBankId { line, value })?;
    Ok(DecodedRow { line, bank, branch })
}

/// Send rows until the source ends, a row fails, or the writer hangs up.
fn stream_rows<R: Read>(
    (mut reader, headers): RowReader<R>,
    tx: mpsc::Sender<Result<DecodedRow, IngestError>>,
) {
    for record in reader.records() {
        let decoded = decode_row(record, &headers);
        let failed = decoded.is_err();
        if tx.blocking_send(decoded).is_err() || failed {
            return;
        }
    }
}

// ── Ingester ────────────────────────────────────────────────────────

pub struct Ingester {
    store: SqliteStore,
}

impl Ingester {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Load the file at `path`.
    pub async fn ingest_path(&self, path: impl AsRef<Path>) -> Result<IngestReport, IngestError> {
        let path = path.as_ref().to_path_buf();
        let opened = task::spawn_blocking({
            let path = path.clone();
            move || File::open(path)
        })
        .await?;
        let file = opened.map_err(|source| IngestError::Open {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Ingesting branch file");
        self.ingest_reader(file).await
    }

    /// Load comma-separated rows from `source`.
    ///
    /// Nothing is written unless every row is accepted.
    pub async fn ingest_reader<R>(&self, source: R) -> Result<IngestReport, IngestError>
    where
        R: Read + Send + 'static,
    {
        let started = Instant::now();
        let reader = task::spawn_blocking(move || open_reader(source)).await??;

        let mut batch = self.store.begin_import().await?;
        let mut seen_banks: HashSet<BankId> = HashSet::new();
        let mut report = IngestReport::default();

        let (tx, mut rx) = mpsc::channel(ROW_BUFFER);
        let decoder = task::spawn_blocking(move || stream_rows(reader, tx));

        while let Some(decoded) = rx.recv().await {
            let DecodedRow { line, bank, branch } = decoded?;
            report.rows += 1;

            if seen_banks.insert(bank.id) {
                batch
                    .insert_bank_if_absent(&bank)
                    .await
                    .map_err(|err| conflict_at(line, err))?;
            }

            if !branch.ifsc.is_well_formed() {
                warn!(line, ifsc = %branch.ifsc, "Malformed IFSC code");
            }
            let inserted = batch
                .insert_branch_if_absent(&branch)
                .await
                .map_err(|err| conflict_at(line, err))?;
            if !inserted {
                report.branches_skipped += 1;
                debug!(line, ifsc = %branch.ifsc, "Skipping existing branch");
            }
        }
        // Surface a panic in the reader task
        decoder.await?;

        report.banks_inserted = batch.banks_inserted();
        report.branches_inserted = batch.branches_inserted();
        batch.commit().await.map_err(|err| {
            error!(error = %err, "Commit failed, batch rolled back");
            err
        })?;

        info!(
            rows = report.rows,
            banks_inserted = report.banks_inserted,
            branches_inserted = report.branches_inserted,
            branches_skipped = report.branches_skipped,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Ingestion committed"
        );
        Ok(report)
    }
}

fn conflict_at(line: u64, err: StoreError) -> IngestError {
    match err {
        StoreError::Conflict(reason) => {
            error!(line, reason = %reason, "Uniqueness conflict, aborting batch");
            IngestError::Conflict { line, reason }
        }
        other => IngestError::Store(other),
    }
}
