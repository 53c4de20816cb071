//! Deterministic scene-level RNG wrapper.
//!
//! Agent behavior itself never draws random numbers; randomness is only used
//! by scene glue such as a scripted player wandering around a headless demo.
//! Seeding from `SimConfig::seed` keeps whole runs reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Scene-level RNG.  Not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
