//! Injectable randomness
//!
//! The dispatch core never reaches for an ambient generator. Every random draw
//! goes through [`RandomSource`], which any `rand` generator satisfies and which
//! [`ScriptedRandom`] implements for exact, replayable runs.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Source of the two kinds of draws the simulation needs
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` must be positive.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// A random source that replays pre-recorded draws
///
/// Once a script runs dry, unit draws return `0.0` (no reroll) and integer
/// draws return `0` (the skip value), so an exhausted script quietly stops
/// moving passengers instead of inventing outcomes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    integers: VecDeque<u32>,
    units_drawn: usize,
    integers_drawn: usize,
}

impl ScriptedRandom {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue unit draws, consumed in order
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue integer draws, consumed in order
    pub fn with_integers(mut self, integers: impl IntoIterator<Item = u32>) -> Self {
        self.integers.extend(integers);
        self
    }

    /// Number of unit draws served so far
    pub fn units_drawn(&self) -> usize {
        self.units_drawn
    }

    /// Number of integer draws served so far
    pub fn integers_drawn(&self) -> usize {
        self.integers_drawn
    }

    /// Whether every scripted draw has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.integers.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.units_drawn += 1;
        self.units.pop_front().unwrap_or(0.0)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.integers_drawn += 1;
        self.integers.pop_front().map(|value| value % bound.max(1)).unwrap_or(0)
    }
}
