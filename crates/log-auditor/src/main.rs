mod bootstrap;

use anyhow::Result;
use auditor_core::settings::Settings;
use auditor_data::analysis::analyze_log;
use auditor_report::summary::render_summary;
use auditor_report::table::write_csv;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Log Auditor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Analyzing {}", settings.log_file.display());

    let result = analyze_log(&settings.log_file)?;
    tracing::info!(
        "Parsed {} of {} lines ({} skipped) in {:.3}s",
        result.metadata.entries_parsed,
        result.metadata.lines_read,
        result.metadata.lines_skipped,
        result.metadata.parse_time_seconds
    );

    print!("{}", render_summary(&result.summary, settings.top as usize));

    write_csv(&result.summary, &settings.output)?;
    println!(
        "\nAnalysis complete! Results have been saved to '{}'",
        settings.output.display()
    );

    Ok(())
}
