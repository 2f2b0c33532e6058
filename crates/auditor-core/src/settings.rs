use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Access-log analysis: per-address and per-endpoint request counts plus
/// brute-force login detection.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "log-auditor",
    about = "Analyze an access log for traffic patterns and suspicious logins",
    version
)]
pub struct Settings {
    /// Path to the access log to analyze
    #[arg(long, default_value = "sample.log")]
    pub log_file: PathBuf,

    /// Path of the CSV file the per-address table is written to
    #[arg(long, default_value = "log_analysis_results.csv")]
    pub output: PathBuf,

    /// How many top addresses to show in the summary (1-100)
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub top: u32,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
