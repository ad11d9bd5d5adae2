use anyhow::Result;

use crate::types::ScanReport;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serialize the report as a single compact JSON line (no trailing newline).
pub fn to_json(report: &ScanReport) -> Result<String> {
    let json = serde_json::to_string(report)?;
    Ok(json)
}

/// Print a human-readable summary to stderr
pub fn print_summary(report: &ScanReport, path: &std::path::Path) {
    eprintln!();
    eprintln!("=== mock-scanner v{} ===", VERSION);
    eprintln!("Target:       {}", path.display());
    eprintln!("Threat level: {}", report.threat_level);
    eprintln!("Threats:      {}", report.threats);
    eprintln!("Duration:     {:.2}s", report.duration);

    if !report.findings.is_empty() {
        eprintln!();
        eprintln!("--- Findings ---");
        for f in &report.findings {
            eprintln!("  line {:>3}: {}", f.line, f.message);
        }
    }

    eprintln!();
}
