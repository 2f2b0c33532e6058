//! CSV table sink for the per-address results.
//!
//! One data row per distinct observed address in first-seen order, after a
//! fixed header row. Field order is part of the output contract.

use std::borrow::Cow;
use std::path::Path;

use auditor_core::error::{AuditorError, Result};
use auditor_data::aggregator::TrafficSummary;
use tracing::info;

/// Fixed header row of the output table.
pub const CSV_HEADER: &str = "IP Address,Request Count,Failed Login Attempts";

/// Render the full CSV document, header included, as a string.
pub fn render_csv(summary: &TrafficSummary) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in summary.rows() {
        out.push_str(&format!(
            "{},{},{}\n",
            escape_field(&row.address),
            row.request_count,
            row.failed_logins
        ));
    }
    out
}

/// Write the CSV table to `path`, creating or truncating the file.
pub fn write_csv(summary: &TrafficSummary, path: &Path) -> Result<()> {
    let csv = render_csv(summary);
    std::fs::write(path, csv).map_err(|e| AuditorError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        "Wrote {} address rows to {}",
        summary.address_count(),
        path.display()
    );
    Ok(())
}

/// Minimal RFC 4180 quoting: fields containing a comma, quote or newline
/// are wrapped in quotes with inner quotes doubled.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
