//! GraphQL schema
//!
//! ```graphql
//! type Query {
//!   branches(limit: Int! = 20, offset: Int! = 0, city: String, bankId: Int): BranchConnection!
//!   branch(ifsc: String!): Branch
//!   banks: [Bank!]!
//! }
//! ```
//!
//! Resolvers apply the same validation as the REST surface; a bad limit or
//! offset comes back as an entry in `errors`.

use crate::service::BranchQueryService;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Error, Object, Result, Schema, SimpleObject,
};
use persistence::StoreError;
use types::bank::Bank;
use types::branch::BranchRecord;
use types::ids::BankId;
use types::page::{BranchFilter, Page, Pagination};

pub type BranchSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(service: BranchQueryService) -> BranchSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(service)
        .finish()
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Bank")]
pub struct BankType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Branch")]
pub struct BranchType {
    pub ifsc: String,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub bank: BankType,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct BranchConnection {
    pub total: i64,
    pub items: Vec<BranchType>,
}

impl From<Bank> for BankType {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id.get(),
            name: bank.name,
        }
    }
}

impl From<BranchRecord> for BranchType {
    fn from(record: BranchRecord) -> Self {
        Self {
            ifsc: record.ifsc.into_inner(),
            branch: record.branch,
            address: record.address,
            city: record.city,
            district: record.district,
            state: record.state,
            bank: record.bank.into(),
        }
    }
}

impl From<Page<BranchRecord>> for BranchConnection {
    fn from(page: Page<BranchRecord>) -> Self {
        Self {
            total: page.total,
            items: page.items.into_iter().map(BranchType::from).collect(),
        }
    }
}

fn store_error(err: StoreError) -> Error {
    tracing::error!(error = %err, "Store failure while resolving query");
    if err.is_unavailable() {
        Error::new("Service unavailable")
    } else {
        Error::new("Internal server error")
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Branches ordered by IFSC, optionally filtered by city and bank.
    async fn branches(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 20)] limit: i64,
        #[graphql(default = 0)] offset: i64,
        city: Option<String>,
        bank_id: Option<i64>,
    ) -> Result<BranchConnection> {
        let page = Pagination::new(limit, offset)?;
        let filter = BranchFilter {
            bank_id: bank_id.map(BankId::new),
            city: None,
        }
        .with_city(city);

        let service = ctx.data::<BranchQueryService>()?;
        let result = service
            .list_branches(&filter, page)
            .await
            .map_err(store_error)?;
        Ok(result.into())
    }

    /// A single branch, or null when the code is unknown.
    async fn branch(&self, ctx: &Context<'_>, ifsc: String) -> Result<Option<BranchType>> {
        let service = ctx.data::<BranchQueryService>()?;
        let record = service.get_branch(&ifsc).await.map_err(store_error)?;
        Ok(record.map(BranchType::from))
    }

    /// All banks ordered by name.
    async fn banks(&self, ctx: &Context<'_>) -> Result<Vec<BankType>> {
        let service = ctx.data::<BranchQueryService>()?;
        let banks = service.list_banks().await.map_err(store_error)?;
        Ok(banks.into_iter().map(BankType::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_exposes_fields() {
        let store = std::sync::Arc::new(NoStore);
        let sdl = build_schema(BranchQueryService::new(store)).sdl();
        assert!(sdl.contains("ifsc: String!"));
        assert!(sdl.contains("bankId"));
        assert!(sdl.contains("type BranchConnection"));
        assert!(sdl.contains("type Bank"));
    }

    /// Store stand-in for schema-only tests.
    struct NoStore;

    #[async_trait::async_trait]
    impl persistence::BranchStore for NoStore {
        async fn get_bank(&self, _: BankId) -> std::result::Result<Option<Bank>, StoreError> {
            Ok(None)
        }
        async fn get_branch(
            &self,
            _: &types::ids::Ifsc,
        ) -> std::result::Result<Option<BranchRecord>, StoreError> {
            Ok(None)
        }
        async fn list_banks(&self) -> std::result::Result<Vec<Bank>, StoreError> {
            Ok(Vec::new())
        }
        async fn list_branches(
            &self,
            _: &BranchFilter,
            _: Pagination,
        ) -> std::result::Result<Page<BranchRecord>, StoreError> {
            Ok(Page::empty())
        }
        async fn ping(&self) -> std::result::Result<(), StoreError> {
            Ok(())
        }
    }
}
