//! Injectable randomness.
//!
//! Random selection is routed through [`RandomSource`] so tests can supply
//! deterministic pick sequences instead of asserting only on membership in
//! a small output set.

use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local randomness — the production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed sequence of picks, for deterministic tests.
///
/// Each scripted value is taken modulo `len`; an exhausted script keeps
/// returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self { picks: picks.into_iter().collect() }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map(|n| n % len).unwrap_or(0)
    }
}
