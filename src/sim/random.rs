//! Injectable randomness
//!
//! The track generator only ever asks for a uniform integer below a bound,
//! so that is the whole contract. Runs use a seeded PCG; tests and replays
//! script the exact draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// Seeded generator for a run
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of draws
///
/// Each value is reduced modulo the requested bound. Once the script runs
/// out every draw returns `bound - 1`, which for the track roll means a
/// plain brick.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Draws left in the script
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) => v % bound,
            None => bound - 1,
        }
    }
}
