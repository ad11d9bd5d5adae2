use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::config;
use crate::json_output;
use crate::scanner::MockScanner;
use crate::types::{RunOptions, ScanReport};

/// Run one mock scan according to the given options.
/// Prints the JSON line to stdout and returns the report.
pub fn run(options: &RunOptions) -> Result<ScanReport> {
    let config = config::resolve(options)?;
    debug!(?config, "resolved configuration");

    let report = match options.seed {
        Some(seed) => MockScanner::seeded(&config, seed)?.scan(&options.path),
        None => MockScanner::with_defaults(&config)?.scan(&options.path),
    };

    let json = json_output::to_json(&report)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    if options.verbose {
        json_output::print_summary(&report, &options.path);
    }

    Ok(report)
}
