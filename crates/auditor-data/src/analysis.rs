//! Main analysis pipeline for the access-log auditor.
//!
//! Orchestrates line reading, parsing and aggregation, returning a sealed
//! [`TrafficSummary`] plus run metadata ready for the report layer.

use std::path::Path;

use auditor_core::error::Result;
use chrono::Utc;
use tracing::debug;

use crate::aggregator::{AccessAggregator, TrafficSummary};
use crate::parser::AccessLogParser;
use crate::reader::read_log_lines;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Total number of lines read from the source.
    pub lines_read: usize,
    /// Lines that matched the structural pattern and were aggregated.
    pub entries_parsed: usize,
    /// Lines skipped as unparseable (noise, truncation, blank lines).
    pub lines_skipped: usize,
    /// Wall-clock seconds spent parsing and aggregating.
    pub parse_time_seconds: f64,
}

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Sealed aggregation counters, ready for querying.
    pub summary: TrafficSummary,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline over the log file at `path`.
///
/// 1. Read all lines (missing file is a fatal error).
/// 2. Parse each line; unparseable lines are advisory skips.
/// 3. Fold every parsed entry into a fresh [`AccessAggregator`].
/// 4. Seal the aggregator and return it with run metadata.
pub fn analyze_log(path: &Path) -> Result<AnalysisResult> {
    let lines = read_log_lines(path)?;

    let parse_start = std::time::Instant::now();
    let parser = AccessLogParser::new();
    let mut aggregator = AccessAggregator::new();
    let mut entries_parsed = 0usize;
    let mut lines_skipped = 0usize;

    for line in &lines {
        match parser.parse(line) {
            Some(entry) => {
                aggregator.record(&entry);
                entries_parsed += 1;
            }
            None => {
                lines_skipped += 1;
                if !line.trim().is_empty() {
                    debug!("Skipping unparseable line: {}", line);
                }
            }
        }
    }

    let parse_time = parse_start.elapsed().as_secs_f64();

    debug!(
        "Parsed {} of {} lines ({} skipped)",
        entries_parsed,
        lines.len(),
        lines_skipped
    );

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read: lines.len(),
        entries_parsed,
        lines_skipped,
        parse_time_seconds: parse_time,
    };

    Ok(AnalysisResult {
        summary: aggregator.seal(),
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use auditor_core::error::AuditorError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── analyze_log ───────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_log_missing_file_is_fatal() {
        let err = analyze_log(Path::new("/tmp/no-such-auditor-log.log"))
            .expect_err("missing input must error");
        assert!(matches!(err, AuditorError::LogPathNotFound(_)));
    }

    #[test]
    fn test_analyze_log_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "access.log", &[]);

        let result = analyze_log(&path).unwrap();
        assert_eq!(result.metadata.lines_read, 0);
        assert!(result.summary.top_addresses(5).is_empty());
        assert!(result.summary.most_accessed_endpoint().is_none());
    }

    #[test]
    fn test_analyze_log_skips_noise_and_continues() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "access.log",
            &[
                "==> access.log.1 <==",
                "",
                r#"1.2.3.4 - - [t] "GET /home HTTP/1.1" 200 500"#,
                "truncated garbage line",
            ],
        );

        let result = analyze_log(&path).unwrap();
        assert_eq!(result.metadata.lines_read, 4);
        assert_eq!(result.metadata.entries_parsed, 1);
        assert_eq!(result.metadata.lines_skipped, 3);
        assert_eq!(result.summary.most_accessed_endpoint(), Some(("/home", 1)));
    }

    #[test]
    fn test_analyze_log_metadata_fields_populated() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "access.log",
            &[r#"1.2.3.4 - - [t] "GET /home HTTP/1.1" 200 500"#],
        );

        let result = analyze_log(&path).unwrap();
        assert!(!result.metadata.generated_at.is_empty());
        assert!(result.metadata.parse_time_seconds >= 0.0);
        assert_eq!(
            result.metadata.entries_parsed + result.metadata.lines_skipped,
            result.metadata.lines_read
        );
    }

    #[test]
    fn test_analyze_log_end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "access.log",
            &[
                r#"1.2.3.4 - - [t] "POST /login HTTP/1.1" 401 200 "Invalid credentials""#,
                r#"1.2.3.4 - - [t] "POST /login HTTP/1.1" 401 200 "Invalid credentials""#,
                r#"5.6.7.8 - - [t] "GET /home HTTP/1.1" 200 500"#,
            ],
        );

        let result = analyze_log(&path).unwrap();
        let summary = &result.summary;

        assert_eq!(
            summary.top_addresses(5),
            vec![("1.2.3.4".to_string(), 2), ("5.6.7.8".to_string(), 1)]
        );
        assert_eq!(summary.most_accessed_endpoint(), Some(("/login", 2)));
        assert_eq!(
            summary.suspicious_addresses(),
            vec![("1.2.3.4".to_string(), 2)]
        );

        let rows = summary.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, "1.2.3.4");
        assert_eq!(rows[0].request_count, 2);
        assert_eq!(rows[0].failed_logins, 2);
        assert_eq!(rows[1].address, "5.6.7.8");
        assert_eq!(rows[1].request_count, 1);
        assert_eq!(rows[1].failed_logins, 0);
    }
}
