//! Bulk importer for the branch directory
//!
//! Reads a delimited source file (header row `bank_id, bank_name, ifsc,
//! branch, address, city, district, state`) and loads it into the store
//! in one transaction. Re-running on the same file is a no-op: banks and
//! branches already present are skipped, and within a file the first
//! occurrence of an IFSC wins.

pub mod record;
pub mod loader;

pub use loader::{IngestError, IngestReport, Ingester};
pub use record::{SourceRow, REQUIRED_COLUMNS};
