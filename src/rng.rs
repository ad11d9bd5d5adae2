// Random sources for the mock scanner.
// The scanner never touches global randomness; it draws everything through a
// RandomSource handed to it at construction.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability the scanner draws all of its randomness from.
pub trait RandomSource {
    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `[lo, hi]`.
    fn next_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform float in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded from OS entropy; every run differs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed script of values, for asserting exact reports in tests.
///
/// Integer draws (`next_index`, `next_int`) consume `ints`; float draws
/// consume `units`. Values are clamped into the requested range, so a script
/// can never produce an out-of-range report. Running out of script panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    ints: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(ints: impl IntoIterator<Item = u32>, units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }

    /// True once every scripted value has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.units.is_empty()
    }

    fn pop_int(&mut self) -> u32 {
        self.ints
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedSource ran out of integer values"))
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        (self.pop_int() as usize).min(len.saturating_sub(1))
    }

    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.pop_int().clamp(lo, hi)
    }

    fn next_unit(&mut self) -> f64 {
        let v = self
            .units
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedSource ran out of float values"));
        if v.is_nan() || v < 0.0 {
            0.0
        } else if v >= 1.0 {
            1.0 - f64::EPSILON
        } else {
            v
        }
    }
}
