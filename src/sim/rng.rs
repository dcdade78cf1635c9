//! Random number sources
//!
//! Every random draw in a match goes through one [`RandomSource`], so a run is
//! fully determined by its seed (or by the scripted values a test supplies).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer generator over a half-open range
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn range(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..high)
    }
}

/// Seeded default source
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Each value is folded into the requested range, so a script written for one
/// range stays valid if a caller asks for a different one.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low || self.values.is_empty() {
            return low;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        low + raw.rem_euclid(high - low)
    }
}
