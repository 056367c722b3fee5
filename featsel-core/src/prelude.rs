//! This module reimports commonly used types.

pub use crate::evaluation::{
    CachedEvaluator, Classifier, Criteria, CrossValidation, FitnessEvaluator, GaussianNaiveBayes, KNearestNeighbors,
    Model,
};
pub use crate::filter::{FilterScorer, InformationGain};
pub use crate::models::{Dataset, FeatureSubset, Sample};
pub use crate::utils::{DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random};
pub use crate::wrapper::aco::{AntColony, ColonyConfig, PheromoneMatrix, PheromoneModel};
pub use crate::wrapper::pso::{ParticleSwarm, SwarmConfig};
pub use crate::wrapper::{Elite, SearchConfig, SearchStrategy, SelectionResult, SubsetScore, WrapperSearch};
