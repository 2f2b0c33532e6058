//! Presentation layer for the access-log auditor.
//!
//! Renders the human-readable summary report and writes the per-address
//! CSV table consumed by downstream tooling.

pub mod summary;
pub mod table;
