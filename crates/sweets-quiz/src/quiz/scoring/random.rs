use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draw used when no sweet scores above zero.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick_index(&self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always picks the same position (wrapped to the catalog length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_repeat_for_the_same_seed() {
        let first = SeededRandom::new(7);
        let second = SeededRandom::new(7);
        let a: Vec<usize> = (0..16).map(|_| first.pick_index(12)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.pick_index(12)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|index| *index < 12));
    }

    #[test]
    fn fixed_index_wraps() {
        assert_eq!(FixedIndex(5).pick_index(3), 2);
        assert_eq!(FixedIndex(0).pick_index(1), 0);
    }

    #[test]
    fn thread_random_stays_in_bounds() {
        for _ in 0..64 {
            assert!(ThreadRandom.pick_index(4) < 4);
        }
    }
}
