//! Shared foundation for the access-log auditor.
//!
//! Holds the data model for parsed log lines, the crate-wide error type,
//! CLI settings and the text formatting helpers used by the report layer.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
