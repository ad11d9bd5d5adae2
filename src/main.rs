// mock-scanner: stands in for a real security analyzer in pipeline plumbing.
// Entry point - argument parsing, logging, and exit codes.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use mock_scanner::pipeline;
use mock_scanner::types::RunOptions;
use tracing_subscriber::EnvFilter;

/// mock-scanner - pretends to run static security analysis on a file.
///
/// The file is never opened. A randomized report is printed to stdout as a
/// single JSON line after a randomized delay.
#[derive(Parser, Debug)]
#[command(
    name = "mock-scanner",
    version,
    about = "Fabricates a randomized security scan report for a file"
)]
struct MockScannerArgs {
    /// Path of the file to "scan" (never opened; may be empty)
    file_path: OsString,

    /// Path to a TOML configuration file
    #[arg(long = "config", short = 'c')]
    config_path: Option<PathBuf>,

    /// Lower bound of the simulated delay, in seconds
    #[arg(long = "min-delay", value_name = "SECS")]
    min_delay: Option<f64>,

    /// Upper bound of the simulated delay, in seconds
    #[arg(long = "max-delay", value_name = "SECS")]
    max_delay: Option<f64>,

    /// Seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Enable verbose output on stderr
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = MockScannerArgs::parse();
    init_logging(args.verbose);

    let options = RunOptions {
        path: PathBuf::from(args.file_path),
        config_path: args.config_path,
        min_delay: args.min_delay,
        max_delay: args.max_delay,
        seed: args.seed,
        verbose: args.verbose,
    };

    if let Err(e) = pipeline::run(&options) {
        eprintln!("Error: {:?}", e);
        process::exit(2);
    }
}
