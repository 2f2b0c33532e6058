use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Substring that marks an authentication-failure message.
///
/// The check is deliberately a loose substring match, so messages like
/// `"Invalid credentials for user admin"` also count.
pub const FAILED_LOGIN_MARKER: &str = "Invalid credentials";

/// A single request record parsed from one access-log line.
///
/// An entry exists only when the source line matched the full structural
/// pattern; there is no such thing as a partially populated entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Client network address in dotted-quad textual form, never empty.
    pub address: String,
    /// Raw contents of the bracketed timestamp field. Opaque to aggregation.
    pub timestamp: String,
    /// HTTP-style verb, e.g. `"GET"` or `"POST"`.
    pub method: String,
    /// Requested resource path.
    pub endpoint: String,
    /// Protocol/version token, e.g. `"HTTP/1.1"`. Unused by aggregation.
    pub protocol: String,
    /// Numeric status code. Three digits by convention, not enforced.
    pub status: u16,
    /// Response size in bytes.
    pub response_size: u64,
    /// Optional trailing quoted message. `None` when the token was absent,
    /// which is distinct from an empty string.
    #[serde(default)]
    pub message: Option<String>,
}

impl LogEntry {
    /// Whether this entry matches the brute-force signature: a `POST` to
    /// `/login` answered with `401` whose message mentions
    /// [`FAILED_LOGIN_MARKER`].
    ///
    /// All four conditions must hold; an absent message never matches.
    pub fn is_failed_login(&self) -> bool {
        self.method == "POST"
            && self.endpoint == "/login"
            && self.status == 401
            && self
                .message
                .as_deref()
                .is_some_and(|m| m.contains(FAILED_LOGIN_MARKER))
    }

    /// Best-effort parse of the raw timestamp field.
    ///
    /// Tries the common-log-format layout (`02/Jan/2024:13:45:00 +0000`)
    /// first, then RFC 3339. Returns `None` for anything else; the
    /// aggregation pipeline never depends on this succeeding.
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.timestamp, "%d/%b/%Y:%H:%M:%S %z")
            .or_else(|_| DateTime::parse_from_rfc3339(&self.timestamp))
            .ok()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
