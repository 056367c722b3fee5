#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::Error;
use rand::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Returns an index from collection with probability proportional to its weight (roulette wheel).
    /// Weights are expected to be non-negative; when all of them are zero, the choice is uniform.
    fn weighted(&self, weights: &[Float]) -> usize {
        assert!(!weights.is_empty());

        let total = weights.iter().sum::<Float>();
        if !total.is_finite() || total <= 0. {
            return self.uniform_int(0, weights.len() as i32 - 1) as usize;
        }

        let mut threshold = self.uniform_real(0., total);
        for (idx, &weight) in weights.iter().enumerate() {
            if threshold < weight {
                return idx;
            }
            threshold -= weight;
        }

        // accumulated rounding error: fall back to the last element with a positive weight
        weights.iter().rposition(|&weight| weight > 0.).unwrap_or(weights.len() - 1)
    }

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small, fast, non-cryptographic generator.
#[derive(Clone)]
pub struct DefaultRandom {
    rng: Arc<Mutex<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::from_entropy())) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    fn with<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut rng)
    }
}

impl SeedableRng for RandomGen {
    type Seed = <SmallRng as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::from_seed(seed))) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.with(|rng| rng.next_u32())
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.with(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.with(|rng| rng.try_fill_bytes(dest))
    }
}
