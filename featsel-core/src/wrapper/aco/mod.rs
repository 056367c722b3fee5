//! Ant colony optimization over feature subsets: every ant builds a path of distinct features
//! choosing the next one with probability proportional to `pheromone^alpha * heuristic^beta`.

use crate::utils::{Float, GenericResult};

mod colony;
pub use self::colony::{Ant, AntColony};

mod pheromone;
pub use self::pheromone::{PheromoneMatrix, PheromoneModel};

/// An ant colony configuration.
#[derive(Clone, Debug)]
pub struct ColonyConfig {
    /// Amount of ants constructing subsets in every iteration.
    pub colony_size: usize,
    /// Relative importance of pheromone.
    pub alpha: Float,
    /// Relative importance of heuristic information.
    pub beta: Float,
    /// Pheromone evaporation rate in `[0, 1]`.
    pub rho: Float,
    /// Initial pheromone intensity of every trail.
    pub init_pheromone: Float,
    /// Specifies what pheromone is attached to.
    pub model: PheromoneModel,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self { colony_size: 30, alpha: 1., beta: 1., rho: 0.2, init_pheromone: 0.2, model: PheromoneModel::Feature }
    }
}

impl ColonyConfig {
    /// Checks that parameters are consistent.
    pub fn validate(&self) -> GenericResult<()> {
        if self.colony_size == 0 {
            return Err("colony size should be positive".into());
        }

        if !(self.alpha.is_finite() && self.alpha >= 0. && self.beta.is_finite() && self.beta >= 0.) {
            return Err(format!("alpha and beta should be non-negative, got {} and {}", self.alpha, self.beta).into());
        }

        if !(0. ..=1.).contains(&self.rho) {
            return Err(format!("evaporation rate should be in [0, 1], got {}", self.rho).into());
        }

        if !(self.init_pheromone.is_finite() && self.init_pheromone >= 0.) {
            return Err(format!("initial pheromone should be non-negative, got {}", self.init_pheromone).into());
        }

        Ok(())
    }
}
