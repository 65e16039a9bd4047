//! Randomness source for phrase selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks an index in `0..len` for a phrase pool.
///
/// Callers never pass `len == 0`.
pub trait ChoiceSource: Send + Sync {
    fn choose(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngChoice;

impl ChoiceSource for ThreadRngChoice {
    fn choose(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Reproducible uniform choice from a seeded RNG.
#[derive(Debug)]
pub struct SeededChoice {
    rng: Mutex<StdRng>,
}

impl SeededChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ChoiceSource for SeededChoice {
    fn choose(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len.max(1))
    }
}

/// Always picks the same position, clamped to the pool size.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(usize);

impl FixedChoice {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
}

impl ChoiceSource for FixedChoice {
    fn choose(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let source = ThreadRngChoice;
        for _ in 0..100 {
            assert!(source.choose(3) < 3);
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let a = SeededChoice::new(7);
        let b = SeededChoice::new(7);
        let picks_a: Vec<_> = (0..20).map(|_| a.choose(5)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.choose(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn fixed_choice_clamps_to_pool() {
        assert_eq!(FixedChoice::new(1).choose(2), 1);
        assert_eq!(FixedChoice::new(9).choose(2), 1);
        assert_eq!(FixedChoice::new(0).choose(1), 0);
    }
}
