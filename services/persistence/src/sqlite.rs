//! SQLite-backed [`BranchStore`]
//!
//! The pool is opened with foreign keys enforced and, for file databases,
//! WAL journaling so readers are not blocked by an import in progress.

use crate::batch::ImportBatch;
use crate::schema;
use crate::store::{BranchStore, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};
use types::bank::Bank;
use types::branch::BranchRecord;
use types::ids::{BankId, Ifsc};
use types::page::{BranchFilter, Page, Pagination};

// ── Configuration ───────────────────────────────────────────────────

/// Connection settings for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `sqlite://path/to/file.db` or `sqlite::memory:`
    pub database_url: String,
    /// Upper bound on pooled connections (forced to 1 for in-memory databases).
    pub max_connections: u32,
}

impl StoreConfig {
    pub const DEFAULT_URL: &'static str = "sqlite://branches.db";
    pub const MEMORY_URL: &'static str = "sqlite::memory:";

    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Self::MEMORY_URL)
    }

    /// Each in-memory connection is a separate database, so the pool must
    /// keep exactly one alive.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: Self::DEFAULT_URL.to_string(),
            max_connections: 5,
        }
    }
}

// ── Rows ────────────────────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
struct BankRow {
    id: i64,
    name: String,
}

impl From<BankRow> for Bank {
    fn from(row: BankRow) -> Self {
        Bank::new(row.id, row.name)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BranchRow {
    ifsc: String,
    bank_id: i64,
    bank_name: String,
    branch: String,
    address: String,
    city: String,
    district: String,
    state: String,
}

impl From<BranchRow> for BranchRecord {
    fn from(row: BranchRow) -> Self {
        BranchRecord {
            ifsc: Ifsc::new(row.ifsc),
            branch: row.branch,
            address: row.address,
            city: row.city,
            district: row.district,
            state: row.state,
            bank: Bank::new(row.bank_id, row.bank_name),
        }
    }
}

const BRANCH_COLUMNS: &str = "\
SELECT br.ifsc, br.bank_id, b.name AS bank_name, br.branch, br.address, \
br.city, br.district, br.state \
FROM branches br JOIN banks b ON b.id = br.bank_id";

const BRANCH_COUNT: &str = "SELECT COUNT(*) FROM branches br JOIN banks b ON b.id = br.bank_id";

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &BranchFilter) {
    qb.push(" WHERE 1 = 1");
    if let Some(bank_id) = filter.bank_id {
        qb.push(" AND br.bank_id = ").push_bind(bank_id.get());
    }
    if let Some(city) = &filter.city {
        qb.push(" AND br.city = ").push_bind(city.clone());
    }
}

// ── Store ───────────────────────────────────────────────────────────

/// Row counts, for operators and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub banks: i64,
    pub branches: i64,
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect and create the schema if it does not exist yet.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new();
        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
            pool_options = pool_options.max_connections(config.max_connections.max(1));
        }

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.ensure_schema().await?;

        info!(
            database_url = %config.database_url,
            max_connections = config.max_connections,
            "Store opened"
        );
        Ok(store)
    }

    /// Fresh, private in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open(&StoreConfig::in_memory()).await
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in schema::statements() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema ensured");
        Ok(())
    }

    /// Start a write transaction for a bulk import.
    pub async fn begin_import(&self) -> Result<ImportBatch, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(ImportBatch::new(tx))
    }

    pub async fn counts(&self) -> Result<StoreCounts, StoreError> {
        let banks = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM banks")
            .fetch_one(&self.pool)
            .await?;
        let branches = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM branches")
            .fetch_one(&self.pool)
            .await?;
        Ok(StoreCounts { banks, branches })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl BranchStore for SqliteStore {
    async fn get_bank(&self, id: BankId) -> Result<Option<Bank>, StoreError> {
        let row = sqlx::query_as::<_, BankRow>("SELECT id, name FROM banks WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Bank::from))
    }

    async fn get_branch(&self, ifsc: &Ifsc) -> Result<Option<BranchRecord>, StoreError> {
        let sql = format!("{BRANCH_COLUMNS} WHERE br.ifsc = ?");
        let row = sqlx::query_as::<_, BranchRow>(&sql)
            .bind(ifsc.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BranchRecord::from))
    }

    async fn list_banks(&self) -> Result<Vec<Bank>, StoreError> {
        let rows = sqlx::query_as::<_, BankRow>("SELECT id, name FROM banks ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Bank::from).collect())
    }

    async fn list_branches(
        &self,
        filter: &BranchFilter,
        page: Pagination,
    ) -> Result<Page<BranchRecord>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let mut count = QueryBuilder::<Sqlite>::new(BRANCH_COUNT);
        push_filter(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

        let mut select = QueryBuilder::<Sqlite>::new(BRANCH_COLUMNS);
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY br.ifsc ASC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let rows: Vec<BranchRow> = select.build_query_as().fetch_all(&mut *tx).await?;

        tx.commit().await?;

        debug!(
            bank_id = ?filter.bank_id,
            city = ?filter.city,
            limit = page.limit(),
            offset = page.offset(),
            total,
            returned = rows.len(),
            "Listed branches"
        );
        Ok(Page::new(total, rows.into_iter().map(BranchRecord::from).collect()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
