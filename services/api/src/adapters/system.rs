//! services/api/src/adapters/system.rs
//!
//! Adapters for the deterministic seams of the core: randomness and wall-clock time.

use chrono::{DateTime, Utc};
use linkshare_core::ports::{Clock, RandomSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// A `RandomSource` backed by `StdRng`, optionally seeded for reproducible runs.
pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn pick(&self, len: usize) -> usize {
        // A poisoned generator is still a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len.max(1))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_stay_in_range() {
        let random = StdRandomSource::from_entropy();
        for len in 1..12 {
            assert!(random.pick(len) < len);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = StdRandomSource::seeded(42);
        let b = StdRandomSource::seeded(42);
        let left: Vec<usize> = (0..20).map(|_| a.pick(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(left, right);
    }
}
