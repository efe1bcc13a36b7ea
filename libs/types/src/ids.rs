//! Identifier types for directory entities
//!
//! Banks are keyed by the numeric id carried in the source file; branches
//! are keyed by their IFSC code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric bank identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(i64);

impl BankId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BankId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for BankId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Indian Financial System Code
///
/// Format: 4 letters (bank code) + `0` + 6 alphanumerics (branch code),
/// e.g. "SBIN0000001". Lookups accept any string; use
/// [`Ifsc::is_well_formed`] to check the nominal format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ifsc(String);

impl Ifsc {
    /// Length of a well-formed code
    pub const LEN: usize = 11;

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Check the nominal `AAAA0XXXXXX` shape
    pub fn is_well_formed(&self) -> bool {
        let bytes = self.0.as_bytes();
        bytes.len() == Self::LEN
            && bytes[..4].iter().all(u8::is_ascii_uppercase)
            && bytes[4] == b'0'
            && bytes[5..].iter().all(u8::is_ascii_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Ifsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ifsc {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ifsc {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Ifsc {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_id_parse() {
        assert_eq!("42".parse::<BankId>().unwrap(), BankId::new(42));
        assert_eq!(" 7 ".parse::<BankId>().unwrap().get(), 7);
        assert!("SBI".parse::<BankId>().is_err());
        assert!("".parse::<BankId>().is_err());
    }

    #[test]
    fn test_bank_id_serialization() {
        let json = serde_json::to_string(&BankId::new(1)).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn test_ifsc_well_formed() {
        assert!(Ifsc::new("SBIN0000001").is_well_formed());
        assert!(Ifsc::new("HDFC0ABC123").is_well_formed());
    }

    #[test]
    fn test_ifsc_malformed() {
        assert!(!Ifsc::new("INVALID123").is_well_formed());
        assert!(!Ifsc::new("SBIN1000001").is_well_formed());
        assert!(!Ifsc::new("sbin0000001").is_well_formed());
        assert!(!Ifsc::new("SBIN00000012").is_well_formed());
        assert!(!Ifsc::new("SBIN0-00001").is_well_formed());
        assert!(!Ifsc::new("").is_well_formed());
    }

    #[test]
    fn test_ifsc_serialization() {
        let ifsc = Ifsc::new("SBIN0000001");
        let json = serde_json::to_string(&ifsc).unwrap();
        assert_eq!(json, "\"SBIN0000001\"");
    }
}
