//! Human-readable summary rendering.
//!
//! The report order is fixed: top-N addresses by request count, the
//! most-accessed endpoint, then either a suspicious-activity listing or an
//! explicit all-clear statement.

use auditor_core::formatting::{divider, two_column};
use auditor_data::aggregator::TrafficSummary;

// Column widths of the classic report layout.
const ADDRESS_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 15;
const FAILED_WIDTH: usize = 25;

/// Render the full summary report into a string.
///
/// `top_n` bounds the address ranking; an analysis with zero recorded
/// requests still renders, with explicit no-data lines instead of empty
/// sections.
pub fn render_summary(summary: &TrafficSummary, top_n: usize) -> String {
    let mut out = String::new();

    // ── Top addresses ─────────────────────────────────────────────────────────
    out.push_str("Requests per IP Address:\n");
    out.push_str(&two_column(
        "IP Address",
        "Request Count",
        ADDRESS_WIDTH,
        COUNT_WIDTH,
    ));
    out.push('\n');
    out.push_str(&divider(ADDRESS_WIDTH + COUNT_WIDTH));
    out.push('\n');
    for (address, count) in summary.top_addresses(top_n) {
        out.push_str(&two_column(
            &address,
            &count.to_string(),
            ADDRESS_WIDTH,
            COUNT_WIDTH,
        ));
        out.push('\n');
    }

    // ── Most accessed endpoint ────────────────────────────────────────────────
    out.push_str("\nMost Frequently Accessed Endpoint:\n");
    match summary.most_accessed_endpoint() {
        Some((endpoint, count)) => {
            out.push_str(&format!("{} (Accessed {} times)\n", endpoint, count));
        }
        None => out.push_str("No requests were recorded.\n"),
    }

    // ── Suspicious activity ───────────────────────────────────────────────────
    let suspicious = summary.suspicious_addresses();
    if suspicious.is_empty() {
        out.push_str("\nNo suspicious activity detected.\n");
    } else {
        out.push_str("\nSuspicious Activity Detected:\n");
        out.push_str(&two_column(
            "IP Address",
            "Failed Login Attempts",
            ADDRESS_WIDTH,
            FAILED_WIDTH,
        ));
        out.push('\n');
        out.push_str(&divider(ADDRESS_WIDTH + FAILED_WIDTH));
        out.push('\n');
        for (address, failed_count) in suspicious {
            out.push_str(&two_column(
                &address,
                &failed_count.to_string(),
                ADDRESS_WIDTH,
                FAILED_WIDTH,
            ));
            out.push('\n');
        }
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
