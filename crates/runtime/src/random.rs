//! Entropy-backed random source for live battles.

use arena_core::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`RandomSource`] backed by `rand`'s standard generator.
///
/// Live sessions use [`StdRandom::from_entropy`]; `--seed` on the CLI maps to
/// [`StdRandom::seeded`] for reproducible runs.
#[derive(Clone, Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
