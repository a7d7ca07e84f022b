//! Noise sources for the global drift term.
//!
//! The drift receives one fresh sample per step. Sources are passed
//! explicitly to `step`/`run` so runs can be made reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Standard deviation of the drift noise
pub const DRIFT_NOISE_STD_DEV: f64 = 0.1;

/// Supplies one drift-noise sample per step
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Seeded random number generator producing N(0, 0.1) samples
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Unseeded source, for runs that do not need to be reproduced
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl NoiseSource for SimRng {
    fn sample(&mut self) -> f64 {
        let z: f64 = self.0.sample(StandardNormal);
        z * DRIFT_NOISE_STD_DEV
    }
}

/// Returns the same value every step. `ConstantNoise(0.0)` removes noise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence, then falls back to zero
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedNoise {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl NoiseSource for ScriptedNoise {
    fn sample(&mut self) -> f64 {
        let value = self.samples.get(self.cursor).copied().unwrap_or(0.0);
        self.cursor += 1;
        value
    }
}
