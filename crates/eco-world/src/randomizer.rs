//! Random sources threaded through the engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;

/// The draws the engine needs. Every random decision goes through one of these.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;
    /// Uniform draw in `[0, bound)`; `bound` is non-zero
    fn next_below(&mut self, bound: u32) -> u32;
    /// Fair coin
    fn next_bool(&mut self) -> bool;
}

/// Seeded generator used for real runs
#[derive(Debug, Clone)]
pub struct Randomizer {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Randomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the original seed
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl RandomSource for Randomizer {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.rng.gen::<bool>()
    }
}

/// Replays queued draws; once a queue runs dry it falls back to a fixed value.
///
/// Fallbacks: `0.99` for floats (above every breeding probability), `0` for
/// bounded integers and `false` for coins.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    ints: VecDeque<u32>,
    bools: VecDeque<bool>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floats(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(draws);
        self
    }

    pub fn with_ints(mut self, draws: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(draws);
        self
    }

    pub fn with_bools(mut self, draws: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(draws);
        self
    }
}

#[cfg(any(test, feature = "test-util"))]
impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.99)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.ints.pop_front().unwrap_or(0).min(bound.saturating_sub(1))
    }

    fn next_bool(&mut self) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Randomizer::new(42);
        let mut b = Randomizer::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
            assert_eq!(a.next_below(8), b.next_below(8));
            assert_eq!(a.next_bool(), b.next_bool());
        }
    }

    #[test]
    fn test_reset_replays() {
        let mut rng = Randomizer::new(7);
        let first: Vec<u32> = (0..10).map(|_| rng.next_below(100)).collect();
        rng.reset();
        let second: Vec<u32> = (0..10).map(|_| rng.next_below(100)).collect();
        assert_eq!(first, second);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_draw_ranges() {
        let mut rng = Randomizer::new(3);
        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!(rng.next_below(4) < 4);
        }
    }

    #[test]
    fn test_scripted_consumes_queues_in_order() {
        let mut rng = ScriptedRandom::new()
            .with_floats([0.25, 0.5])
            .with_ints([1, 2]);
        assert_eq!(rng.next_f64(), 0.25);
        assert_eq!(rng.next_below(4), 1);
        assert_eq!(rng.next_f64(), 0.5);
        assert_eq!(rng.next_below(4), 2);
    }

    #[test]
    fn test_scripted_fallbacks() {
        let mut rng = ScriptedRandom::new()
            .with_floats([0.0])
            .with_ints([5])
            .with_bools([true]);
        assert_eq!(rng.next_f64(), 0.0);
        assert_eq!(rng.next_f64(), 0.99);
        // clamped to the bound
        assert_eq!(rng.next_below(3), 2);
        assert_eq!(rng.next_below(3), 0);
        assert!(rng.next_bool());
        assert!(!rng.next_bool());
    }
}
