//! Seedable noise source for the simulated sensor.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Uniform};

/// Noise generator with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
    unit: Uniform<f64>,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self {
            rng,
            unit: Uniform::new_inclusive(-1.0, 1.0),
        }
    }

    /// Uniform sample in `[-limit, +limit]`.
    ///
    /// A zero, negative or non-finite limit yields exactly zero.
    #[inline]
    pub fn symmetric_uniform(&mut self, limit: f64) -> f64 {
        if !(limit > 0.0 && limit.is_finite()) {
            return 0.0;
        }
        self.unit.sample(&mut self.rng) * limit
    }
}
