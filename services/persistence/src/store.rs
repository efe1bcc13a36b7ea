//! Read contract for the branch directory
//!
//! The query layer depends on [`BranchStore`] only, so transports can be
//! exercised against any backing store.

use async_trait::async_trait;
use thiserror::Error;
use types::bank::Bank;
use types::branch::BranchRecord;
use types::ids::{BankId, Ifsc};
use types::page::{BranchFilter, Page, Pagination};

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    /// Uniqueness or foreign-key violation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Pool exhausted or closed, or the database could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() || db.is_foreign_key_violation() {
                return StoreError::Conflict(db.message().to_string());
            }
        }
        if matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        ) {
            return StoreError::Unavailable(err.to_string());
        }
        StoreError::Database(err)
    }
}

// ── Contract ────────────────────────────────────────────────────────

/// Read access to banks and branches.
///
/// Every call is an independent read; implementations hold no state
/// between calls beyond their connection pool.
#[async_trait]
pub trait BranchStore: Send + Sync {
    async fn get_bank(&self, id: BankId) -> Result<Option<Bank>, StoreError>;

    /// Look up a branch by IFSC, joined with its bank.
    async fn get_branch(&self, ifsc: &Ifsc) -> Result<Option<BranchRecord>, StoreError>;

    /// All banks, ordered by name ascending.
    async fn list_banks(&self) -> Result<Vec<Bank>, StoreError>;

    /// Filtered branches ordered by IFSC ascending.
    ///
    /// `total` counts every match before `page` is applied; the count and
    /// the items observe the same snapshot.
    async fn list_branches(
        &self,
        filter: &BranchFilter,
        page: Pagination,
    ) -> Result<Page<BranchRecord>, StoreError>;

    /// Round-trip to the database.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(StoreError::from(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StoreError::from(sqlx::Error::PoolClosed).is_unavailable());
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
        assert!(!err.is_conflict());
    }
}
