//! Sources of uniform random samples for draws.
//!
//! The selection engine never generates randomness itself; callers hand it a
//! sample from one of these, so tests can pin exact outcomes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces samples uniformly distributed in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Next sample in `[0, 1)`.
    fn next_sample(&self) -> f64;
}

/// Thread-local `rand` generator. Not cryptographically secure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_sample(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Seeded generator for reproducible runs.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Create a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_sample(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
///
/// An empty sequence always yields `0.0`.
#[derive(Debug)]
pub struct FixedRandomSource {
    samples: Vec<f64>,
    index: AtomicUsize,
}

impl FixedRandomSource {
    /// Cycle through `samples` in order.
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            index: AtomicUsize::new(0),
        }
    }

    /// Always return `sample`.
    #[must_use]
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for FixedRandomSource {
    fn next_sample(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.samples[idx % self.samples.len()]
    }
}
