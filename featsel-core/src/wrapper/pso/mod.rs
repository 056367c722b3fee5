//! Particle swarm optimization over feature subsets: every particle is a continuous position vector,
//! a feature is selected when its coordinate exceeds the `theta` threshold.

use crate::utils::{Float, GenericResult};

mod particle;
pub use self::particle::Particle;

mod swarm;
pub use self::swarm::ParticleSwarm;

/// A particle swarm configuration.
#[derive(Clone, Debug)]
pub struct SwarmConfig {
    /// Amount of particles.
    pub population_size: usize,
    /// Inertia weight `w`.
    pub inertia_weight: Float,
    /// Acceleration coefficient of personal best attraction.
    pub c1: Float,
    /// Acceleration coefficient of global best attraction.
    pub c2: Float,
    /// Lower velocity bound.
    pub min_velocity: Float,
    /// Upper velocity bound.
    pub max_velocity: Float,
    /// Lower position bound.
    pub start_interval: Float,
    /// Upper position bound.
    pub end_interval: Float,
    /// A threshold which separates selected from not selected coordinates.
    pub theta: Float,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            inertia_weight: 0.7298,
            c1: 1.49618,
            c2: 1.49618,
            min_velocity: -6.,
            max_velocity: 6.,
            start_interval: 0.,
            end_interval: 1.,
            theta: 0.6,
        }
    }
}

/// A margin above theta used to draw coordinates of initially selected features.
pub(crate) const SELECTED_MARGIN: Float = 0.001;

impl SwarmConfig {
    /// Checks that parameters are consistent.
    pub fn validate(&self) -> GenericResult<()> {
        let values = [
            self.inertia_weight,
            self.c1,
            self.c2,
            self.min_velocity,
            self.max_velocity,
            self.start_interval,
            self.end_interval,
            self.theta,
        ];

        if values.iter().any(|value| !value.is_finite()) {
            return Err("swarm parameters should be finite numbers".into());
        }

        if self.population_size == 0 {
            return Err("population size should be positive".into());
        }

        if self.min_velocity >= self.max_velocity {
            return Err(format!("invalid velocity bounds: [{}, {}]", self.min_velocity, self.max_velocity).into());
        }

        if self.start_interval >= self.end_interval {
            return Err(format!("invalid position bounds: [{}, {}]", self.start_interval, self.end_interval).into());
        }

        if self.theta <= self.start_interval || self.theta + SELECTED_MARGIN >= self.end_interval {
            return Err(format!(
                "theta {} should be inside position bounds ({}, {})",
                self.theta, self.start_interval, self.end_interval
            )
            .into());
        }

        Ok(())
    }
}
