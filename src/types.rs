use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Message attached to every fabricated finding.
pub const FINDING_MESSAGE: &str = "Simulated security vulnerability";

/// Upper bound (inclusive) on the number of fabricated findings.
pub const MAX_THREATS: u32 = 10;

/// Range (inclusive) of fabricated finding line numbers.
pub const MIN_LINE: u32 = 1;
pub const MAX_LINE: u32 = 100;

/// Coarse severity label attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// Every level, lowest first.
    pub const ALL: [ThreatLevel; 5] = [
        ThreatLevel::None,
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::None => "none",
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThreatLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThreatLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown threat level '{}'. Valid levels: none, low, medium, high, critical",
                    s
                )
            })
    }
}

/// A single simulated vulnerability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-based).
    pub line: u32,
    pub message: String,
}

impl Finding {
    pub fn at_line(line: u32) -> Self {
        Self {
            line,
            message: FINDING_MESSAGE.to_owned(),
        }
    }
}

/// The fabricated result of one scan. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(rename = "threatLevel")]
    pub threat_level: ThreatLevel,
    /// Always equal to `findings.len()`.
    pub threats: u32,
    pub findings: Vec<Finding>,
    /// Seconds, rounded to 2 decimal places.
    pub duration: f64,
}

/// Bounds of the simulated analysis latency, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DelayBounds {
    pub min_seconds: f64,
    pub max_seconds: f64,
}

impl DelayBounds {
    pub fn new(min_seconds: f64, max_seconds: f64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }

    /// No delay at all.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Bounds must be finite, non-negative, ordered, and representable as a
    /// `Duration`. The minimum must sit on the 0.01s grid so a rounded report
    /// never falls below it.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.min_seconds.is_finite() || !self.max_seconds.is_finite() {
            anyhow::bail!(
                "Delay bounds must be finite (got min {}, max {})",
                self.min_seconds,
                self.max_seconds
            );
        }
        if self.min_seconds < 0.0 {
            anyhow::bail!("Minimum delay must not be negative (got {})", self.min_seconds);
        }
        if self.min_seconds > self.max_seconds {
            anyhow::bail!(
                "Minimum delay {} exceeds maximum delay {}",
                self.min_seconds,
                self.max_seconds
            );
        }
        if self.max_seconds >= Duration::MAX.as_secs_f64() {
            anyhow::bail!(
                "Maximum delay {} is too large to sleep for",
                self.max_seconds
            );
        }
        if (self.min_seconds * 100.0).round() / 100.0 != self.min_seconds {
            anyhow::bail!(
                "Minimum delay {} must be a whole number of hundredths of a second",
                self.min_seconds
            );
        }
        Ok(())
    }
}

impl Default for DelayBounds {
    fn default() -> Self {
        Self::new(5.0, 30.0)
    }
}

/// Configuration for the mock scanner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub delay: DelayBounds,
}

/// CLI options passed through the pipeline
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to "scan". Never opened.
    pub path: PathBuf,
    /// Optional config file path
    pub config_path: Option<PathBuf>,
    /// Overrides for the configured delay bounds
    pub min_delay: Option<f64>,
    pub max_delay: Option<f64>,
    /// Seed for a reproducible random source
    pub seed: Option<u64>,
    /// Verbose output
    pub verbose: bool,
}
