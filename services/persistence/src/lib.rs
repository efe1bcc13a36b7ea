//! Branch Directory Store
//!
//! Relational persistence for banks and branches on SQLite, accessed
//! through a `sqlx` connection pool. Every read acquires a pooled
//! connection for its own duration; writes go through an [`ImportBatch`],
//! a single transaction that rolls back unless committed.
//!
//! # Modules
//! - `schema`: table and index definitions
//! - `store`: the read contract ([`BranchStore`]) and error taxonomy
//! - `sqlite`: the SQLite implementation and pool configuration
//! - `batch`: the transactional write unit used by ingestion

pub mod schema;
pub mod store;
pub mod sqlite;
pub mod batch;

pub use batch::ImportBatch;
pub use sqlite::{SqliteStore, StoreConfig, StoreCounts};
pub use store::{BranchStore, StoreError};
