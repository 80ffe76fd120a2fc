// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source threaded explicitly through the hole generators.
pub struct StaticRandom {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl StaticRandom {
    /// Entropy-seeded; the first 100..200 outputs are discarded.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed[..]);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let counter = rng.random_range(100..200);
        for _ in 0..counter {
            rng.random::<u32>();
        }
        StaticRandom { rng, seed: None }
    }

    /// Reproducible stream for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        StaticRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform in [min_value, max_value)
    pub fn next_in(&mut self, min_value: i64, max_value: i64) -> i64 {
        self.rng.random_range(min_value..max_value)
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}
