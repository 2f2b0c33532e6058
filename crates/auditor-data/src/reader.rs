//! Raw line source for the analysis pipeline.
//!
//! The pipeline treats its input as an opaque sequence of text lines;
//! this module is the file-backed collaborator that produces them.

use std::io::BufRead;
use std::path::Path;

use auditor_core::error::{AuditorError, Result};
use tracing::{debug, warn};

/// Read every line of the log file at `path`.
///
/// A missing or unopenable file is a fatal error surfaced before any
/// aggregation begins. Individual lines that cannot be decoded are
/// skipped with a warning; a single bad line never aborts the run.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(AuditorError::LogPathNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|e| AuditorError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = std::io::BufReader::new(file);
    let mut lines: Vec<String> = Vec::new();

    for line in reader.lines() {
        match line {
            Ok(l) => lines.push(l),
            Err(e) => {
                warn!("Skipping unreadable line in {}: {}", path.display(), e);
            }
        }
    }

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_read_log_lines_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "access.log", &["first", "second"]);

        let lines = read_log_lines(&path).unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_read_log_lines_preserves_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "access.log", &["first", "", "third"]);

        let lines = read_log_lines(&path).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_read_log_lines_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "access.log", &[]);

        let lines = read_log_lines(&path).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_log_lines_missing_file_is_fatal() {
        let err = read_log_lines(Path::new("/tmp/does-not-exist-auditor-test-xyz.log"))
            .expect_err("missing file must error");
        assert!(matches!(err, AuditorError::LogPathNotFound(_)));
    }
}
