//! Types library for the bank branch directory
//!
//! This library provides the core type definitions shared by the store,
//! the CSV importer and the query gateway.
//!
//! # Modules
//! - `ids`: Identifiers (BankId, Ifsc)
//! - `bank`: Bank records
//! - `branch`: Branch records and the joined read model
//! - `page`: Filtering and pagination
//! - `errors`: Validation errors

// Public modules
pub mod ids;
pub mod bank;
pub mod branch;
pub mod page;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::bank::*;
    pub use crate::branch::*;
    pub use crate::page::*;
    pub use crate::errors::*;
}
