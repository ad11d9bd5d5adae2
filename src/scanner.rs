// Mock scanner - fabricates a scan report for a path without reading it.
// Every draw goes through the injected RandomSource and the latency goes
// through the injected Sleeper, so tests can pin both down.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::rng::{RandomSource, RngSource};
use crate::sleeper::{Sleeper, ThreadSleeper};
use crate::types::{
    DelayBounds, Finding, ScanReport, ScannerConfig, ThreatLevel, MAX_LINE, MAX_THREATS, MIN_LINE,
};

/// Pretends to analyze a file and returns a randomized report.
pub struct MockScanner<R, S> {
    delay: DelayBounds,
    random: R,
    sleeper: S,
}

impl MockScanner<RngSource<StdRng>, ThreadSleeper> {
    /// Entropy-seeded randomness and a real blocking delay.
    pub fn with_defaults(config: &ScannerConfig) -> Result<Self> {
        Self::new(config, RngSource::from_entropy(), ThreadSleeper)
    }

    /// A fixed seed reproduces the same report.
    pub fn seeded(config: &ScannerConfig, seed: u64) -> Result<Self> {
        Self::new(config, RngSource::seeded(seed), ThreadSleeper)
    }
}

impl<R: RandomSource, S: Sleeper> MockScanner<R, S> {
    /// Fails only if the configured delay bounds are invalid.
    pub fn new(config: &ScannerConfig, random: R, sleeper: S) -> Result<Self> {
        config.delay.validate()?;
        Ok(Self {
            delay: config.delay,
            random,
            sleeper,
        })
    }

    /// Fabricate a report for `path`, blocking for the drawn duration.
    ///
    /// The path is an opaque label: it is never opened, and nonexistent or
    /// empty paths are fine. Threat level and finding count are drawn
    /// independently and may disagree.
    pub fn scan(&mut self, path: &Path) -> ScanReport {
        info!(path = %path.display(), "starting mock scan");

        let level_idx = self.random.next_index(ThreatLevel::ALL.len());
        let threat_level = ThreatLevel::ALL[level_idx];

        let threats = self.random.next_int(0, MAX_THREATS);
        let findings: Vec<Finding> = (0..threats)
            .map(|_| Finding::at_line(self.random.next_int(MIN_LINE, MAX_LINE)))
            .collect();

        let seconds = self.draw_seconds();
        debug!(
            %threat_level,
            threats,
            delay_seconds = seconds,
            "fabricated report, simulating analysis latency"
        );

        self.sleeper.sleep(Duration::from_secs_f64(seconds));

        let duration = round_reported(seconds, &self.delay);
        info!(%threat_level, threats, duration, "mock scan complete");

        ScanReport {
            threat_level,
            threats,
            findings,
            duration,
        }
    }

    /// Uniform in `[min, max)`; exactly `min` when the bounds coincide.
    fn draw_seconds(&mut self) -> f64 {
        let span = self.delay.max_seconds - self.delay.min_seconds;
        let unit = self.random.next_unit();
        let seconds = self.delay.min_seconds + unit * span;
        if span > 0.0 && seconds >= self.delay.max_seconds {
            self.delay.min_seconds
        } else {
            seconds
        }
    }
}

/// Round to 2 decimals without letting the reported value reach `max`.
fn round_reported(seconds: f64, delay: &DelayBounds) -> f64 {
    let rounded = (seconds * 100.0).round() / 100.0;
    if delay.max_seconds > delay.min_seconds && rounded >= delay.max_seconds {
        (seconds * 100.0).floor() / 100.0
    } else {
        rounded
    }
}
