//! Bank records

use crate::ids::BankId;
use serde::{Deserialize, Serialize};

/// A financial institution owning one or more branches
///
/// Invariant: `name` is unique across all banks (enforced by the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,
    pub name: String,
}

impl Bank {
    pub fn new(id: impl Into<BankId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_json_shape() {
        let bank = Bank::new(1, "STATE BANK OF INDIA");
        let json = serde_json::to_value(&bank).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "STATE BANK OF INDIA"}));
    }
}
