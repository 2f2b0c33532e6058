//! Data ingestion layer for the access-log auditor.
//!
//! Responsible for reading raw log lines, parsing them into
//! [`LogEntry`](auditor_core::models::LogEntry) values, aggregating
//! per-address and per-endpoint counters and running the top-level
//! analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod reader;

pub use auditor_core as core;
