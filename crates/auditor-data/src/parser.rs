//! Structural parsing of individual access-log lines.
//!
//! One line must decompose, in order, into: an IPv4-shaped dotted quad,
//! the literal ` - - `, a bracketed timestamp, a quoted request line
//! `"METHOD PATH HTTP/x.y"`, an integer status, an integer size and an
//! optional trailing quoted message. Anything else is a no-match the
//! caller may skip; a corrupt line never aborts a run.

use auditor_core::models::LogEntry;
use regex::Regex;

/// Full-line pattern for a well-formed access-log record.
///
/// Anchored at both ends: trailing garbage after the size (or message)
/// field makes the whole line unparseable rather than silently ignored.
/// The message capture is greedy so embedded quotes inside the message
/// are preserved; only the final quote on the line terminates it.
const LOG_PATTERN: &str = concat!(
    r#"^(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) - - "#,
    r#"\[([^\]]*)\] "(\S+) (\S+) (HTTP/\d+\.\d+)" (\d+) (\d+)(?: "(.*)")?$"#,
);

/// Parser for one access-log line.
///
/// The pattern is compiled once at construction; [`parse`](Self::parse)
/// is a pure function of its input with no side effects.
pub struct AccessLogParser {
    pattern: Regex,
}

impl AccessLogParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LOG_PATTERN).expect("log pattern is valid"),
        }
    }

    /// Parse a single line into a [`LogEntry`].
    ///
    /// Returns `None` when the line does not match the full structural
    /// pattern, including when the status or size token does not fit its
    /// integer type. A partial match never yields a partially filled
    /// entry.
    pub fn parse(&self, line: &str) -> Option<LogEntry> {
        // Logs written on Windows or over the wire may end lines with \r.
        let line = line.trim_end_matches('\r');

        let caps = self.pattern.captures(line)?;

        let status: u16 = caps[6].parse().ok()?;
        let response_size: u64 = caps[7].parse().ok()?;

        Some(LogEntry {
            address: caps[1].to_string(),
            timestamp: caps[2].to_string(),
            method: caps[3].to_string(),
            endpoint: caps[4].to_string(),
            protocol: caps[5].to_string(),
            status,
            response_size,
            message: caps.get(8).map(|m| m.as_str().to_string()),
        })
    }
}

impl Default for AccessLogParser {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
