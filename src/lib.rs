// mock-scanner: a stand-in security analyzer that fabricates scan reports.

pub mod config;
pub mod json_output;
pub mod pipeline;
pub mod rng;
pub mod scanner;
pub mod sleeper;
pub mod types;

pub use rng::{RandomSource, RngSource, ScriptedSource};
pub use scanner::MockScanner;
pub use sleeper::{RecordingSleeper, Sleeper, ThreadSleeper};
pub use types::{DelayBounds, Finding, ScanReport, ScannerConfig, ThreatLevel};
