use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of the randomness behind jitter, intensity redraws and damage sampling.
///
/// Implementations are not required to be thread-safe; callers guard them.
pub trait RandomSource {
    /// Uniform sample in the inclusive range `[min, max]`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Pick one item uniformly. `None` only when `items` is empty.
    fn choice<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i).copied()
    }
}

/// ChaCha-backed generator; identical seeds give identical sequences on every platform.
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed script of unit-interval values, cycling when it runs out.
///
/// A value `u` maps to `min + u * (max - min)` for `uniform`, and to
/// `floor(u * len)` (capped at `len - 1`) for `index`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<f64>,
    pending: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<f64>>) -> Self {
        let script: Vec<f64> = script
            .into()
            .into_iter()
            .map(|u| u.clamp(0.0, 1.0))
            .collect();
        let pending = script.iter().copied().collect();
        Self { script, pending }
    }

    fn next_unit(&mut self) -> f64 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        // An empty script behaves like a constant midpoint.
        self.pending.pop_front().unwrap_or(0.5)
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        let u = self.next_unit();
        min + u * (max - min)
    }

    fn index(&mut self, len: usize) -> usize {
        let u = self.next_unit();
        ((u * len as f64) as usize).min(len.saturating_sub(1))
    }
}
