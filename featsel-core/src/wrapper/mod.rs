//! The wrapper module contains population-based search over feature subsets where every candidate
//! subset is scored by an external [`FitnessEvaluator`](crate::evaluation::FitnessEvaluator).
//!
//! The search loop lives in [`WrapperSearch`], variant specific logic is plugged in through
//! [`SearchStrategy`]: see [`pso::ParticleSwarm`] and [`aco::AntColony`].

use crate::models::FeatureSubset;
use crate::utils::{Float, Random};

pub mod aco;
pub mod pso;

mod engine;
pub use self::engine::*;

mod score;
pub use self::score::SubsetScore;

mod telemetry;
pub use self::telemetry::IterationMetrics;

/// Keeps the best known representation found by the search together with its decoded subset.
#[derive(Clone, Debug)]
pub struct Elite<R> {
    /// A strategy specific representation: position vector or construction path.
    pub representation: R,
    /// A decoded feature subset.
    pub subset: FeatureSubset,
    /// A score used by best tracking.
    pub score: SubsetScore,
}

/// A variant specific part of the population-based search.
///
/// The engine calls methods in the following order once per iteration: `decode`, `assign_fitness`,
/// `update_personal_best`, `best_candidate`, then `advance` with the global best.
pub trait SearchStrategy {
    /// A representation of a candidate which can be kept as the global best.
    type Representation: Clone + Send + Sync;

    /// Returns a short name of the strategy.
    fn name(&self) -> &str;

    /// Returns amount of original features.
    fn dimension(&self) -> usize;

    /// Returns amount of candidates.
    fn size(&self) -> usize;

    /// Creates the first generation of candidates.
    fn initialize(&mut self, random: &(dyn Random + Send + Sync));

    /// Decodes every candidate into a feature subset, in candidate order.
    fn decode(&self) -> Vec<FeatureSubset>;

    /// Assigns fitness values to candidates, in candidate order.
    fn assign_fitness(&mut self, fitness: &[Float]);

    /// Promotes current candidates to their personal (or colony level) bests.
    fn update_personal_best(&mut self);

    /// Returns the dominant personal best among all candidates.
    fn best_candidate(&self) -> Option<Elite<Self::Representation>>;

    /// Produces the next generation of candidates.
    fn advance(&mut self, global_best: &Elite<Self::Representation>, random: &(dyn Random + Send + Sync));

    /// Ranks all features, the most preferable first, using the best known representation.
    fn rank_features(&self, best: &Elite<Self::Representation>) -> Vec<usize>;
}
