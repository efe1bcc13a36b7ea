//! Filtering and pagination for branch listings
//!
//! Listings are always ordered by IFSC ascending, so a fixed
//! [`Pagination`] window is stable across calls.

use crate::errors::ValidationError;
use crate::ids::BankId;
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not give one
pub const DEFAULT_LIMIT: i64 = 20;
/// Smallest accepted page size
pub const MIN_LIMIT: i64 = 1;
/// Largest accepted page size
pub const MAX_LIMIT: i64 = 200;

/// Validated limit/offset window
///
/// Invariant: `MIN_LIMIT <= limit <= MAX_LIMIT` and `offset >= 0`.
/// Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::LimitOutOfRange {
                got: limit,
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            });
        }
        if offset < 0 {
            return Err(ValidationError::NegativeOffset { got: offset });
        }
        Ok(Self { limit, offset })
    }

    /// Validate optional parameters, filling in the defaults
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Result<Self, ValidationError> {
        Self::new(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(0))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// The window immediately after this one
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Exact-match filter over branches
///
/// Both predicates are optional; an absent predicate matches everything.
/// City matching is case-sensitive with no normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchFilter {
    pub bank_id: Option<BankId>,
    pub city: Option<String>,
}

impl BranchFilter {
    /// Match every branch
    pub fn all() -> Self {
        Self::default()
    }

    /// Match branches of one bank
    pub fn for_bank(bank_id: impl Into<BankId>) -> Self {
        Self {
            bank_id: Some(bank_id.into()),
            city: None,
        }
    }

    /// Restrict to a city; an empty city is treated as no filter
    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city.filter(|c| !c.is_empty());
        self
    }
}

/// One page of a listing plus the total match count
///
/// `total` counts all matching rows before limit/offset are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total: i64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
