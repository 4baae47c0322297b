//! Random source for boundary jitter
//!
//! Passed explicitly to every call that needs it; there is no process-wide
//! generator. Seeded sources make fuzz runs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform integer generator.
pub trait RandomSource {
    /// Uniform value in `[low, high)`. Caller guarantees `low < high`.
    fn random_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..high)
    }
}

/// Seeded generator that remembers its seed, so a failing run can be
/// replayed.
#[derive(Debug, Clone)]
pub struct DeterministicRandom {
    seed: u64,
    rng: StdRng,
}

impl DeterministicRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for DeterministicRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
