//! Branch records
//!
//! [`Branch`] mirrors a row of the `branches` table; [`BranchRecord`] is
//! the read model returned to clients, with the owning bank nested.

use crate::bank::Bank;
use crate::ids::{BankId, Ifsc};
use serde::{Deserialize, Serialize};

/// A physical bank location, keyed by IFSC
///
/// Invariant: `bank_id` references an existing [`Bank`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    pub ifsc: Ifsc,
    pub bank_id: BankId,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
}

/// A branch joined with its owning bank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchRecord {
    pub ifsc: Ifsc,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub bank: Bank,
}

impl BranchRecord {
    /// Split back into the stored row and the bank
    pub fn into_parts(self) -> (Branch, Bank) {
        let branch = Branch {
            ifsc: self.ifsc,
            bank_id: self.bank.id,
            branch: self.branch,
            address: self.address,
            city: self.city,
            district: self.district,
            state: self.state,
        };
        (branch, self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BranchRecord {
        BranchRecord {
            ifsc: Ifsc::new("SBIN0000001"),
            branch: "MUMBAI".to_string(),
            address: "FORT".to_string(),
            city: "MUMBAI".to_string(),
            district: "MUMBAI".to_string(),
            state: "MAHARASHTRA".to_string(),
            bank: Bank::new(1, "STATE BANK OF INDIA"),
        }
    }

    fn sample_branch() -> Branch {
        Branch {
            ifsc: Ifsc::new("SBIN0000001"),
            bank_id: BankId::new(1),
            branch: "MUMBAI".to_string(),
            address: "FORT".to_string(),
            city: "MUMBAI".to_string(),
            district: "MUMBAI".to_string(),
            state: "MAHARASHTRA".to_string(),
        }
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["ifsc"], "SBIN0000001");
        assert_eq!(json["bank"]["id"], 1);
        assert_eq!(json["bank"]["name"], "STATE BANK OF INDIA");
        assert!(json.get("bank_id").is_none());
    }

    #[test]
    fn test_into_parts_restores_row() {
        let (branch, bank) = sample_record().into_parts();
        assert_eq!(branch, sample_branch());
        assert_eq!(bank, Bank::new(1, "STATE BANK OF INDIA"));
    }
}
