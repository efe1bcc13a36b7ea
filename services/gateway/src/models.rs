use serde::{Deserialize, Serialize};
use types::bank::Bank;
use types::branch::BranchRecord;
use types::page::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankOut {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOut {
    pub ifsc: String,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub bank: BankOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedBranches {
    pub total: i64,
    pub items: Vec<BranchOut>,
}

/// Query string of `GET /banks/{bank_id}/branches`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBranchesParams {
    pub city: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<Bank> for BankOut {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id.get(),
            name: bank.name,
        }
    }
}

impl From<BranchRecord> for BranchOut {
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

impl From<Page<BranchRecord>> for PaginatedBranches {
    fn from(page: Page<BranchRecord>) -> Self {
        Self {
            total: page.total,
            items: page.items.into_iter().map(BranchOut::from).collect(),
        }
    }
}
