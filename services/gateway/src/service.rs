//! Transport-independent read operations
//!
//! Parameters arrive here already validated; this layer only builds the
//! store query. Each call is one independent read.

use persistence::{BranchStore, StoreError};
use std::sync::Arc;
use types::bank::Bank;
use types::branch::BranchRecord;
use types::ids::Ifsc;
use types::page::{BranchFilter, Page, Pagination};

#[derive(Clone)]
pub struct BranchQueryService {
    store: Arc<dyn BranchStore>,
}

impl BranchQueryService {
    pub fn new(store: Arc<dyn BranchStore>) -> Self {
        Self { store }
    }

    /// All banks ordered by name. Unpaginated: the bank list is small.
    pub async fn list_banks(&self) -> Result<Vec<Bank>, StoreError> {
        self.store.list_banks().await
    }

    /// `None` when no branch has this code, including malformed codes.
    pub async fn get_branch(&self, ifsc: &str) -> Result<Option<BranchRecord>, StoreError> {
        self.store.get_branch(&Ifsc::new(ifsc)).await
    }

    pub async fn list_branches(
        &self,
        filter: &BranchFilter,
        page: Pagination,
    ) -> Result<Page<BranchRecord>, StoreError> {
        self.store.list_branches(filter, page).await
    }

    pub async fn health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
