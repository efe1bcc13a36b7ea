//! Error types for request validation
//!
//! Validation runs at the transport boundary, before any store access.

use thiserror::Error;

/// Rejected request parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("limit must be between {min} and {max}, got {got}")]
    LimitOutOfRange { got: i64, min: i64, max: i64 },

    #[error("offset must be greater than or equal to 0, got {got}")]
    NegativeOffset { got: i64 },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ValidationError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_error_display() {
        let err = ValidationError::LimitOutOfRange { got: 0, min: 1, max: 200 };
        assert_eq!(err.to_string(), "limit must be between 1 and 200, got 0");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ValidationError::invalid_parameter("bank_id", "not an integer");
        assert!(err.to_string().contains("bank_id"));
        assert!(err.to_string().contains("not an integer"));
    }
}
