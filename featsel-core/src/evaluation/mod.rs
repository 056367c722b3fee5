//! The evaluation module contains logic to score a feature subset by classification performance.
//!
//! The wrapper search consumes it only through [`FitnessEvaluator`]; cross validation with concrete
//! classifiers is one implementation of it.

use crate::models::FeatureSubset;
use crate::utils::{Float, GenericResult};

mod cache;
pub use self::cache::CachedEvaluator;

mod classifier;
pub use self::classifier::*;

mod cross_validation;
pub use self::cross_validation::CrossValidation;

/// Performance criteria of a feature subset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Criteria {
    /// A share of correctly classified samples in `[0, 1]`.
    pub accuracy: Float,
    /// A share of misclassified samples in `[0, 1]`.
    pub error_rate: Float,
}

impl Criteria {
    /// Creates criteria from amount of correctly classified samples.
    pub fn from_counts(correct: usize, total: usize) -> Self {
        let accuracy = if total == 0 { 0. } else { correct as Float / total as Float };

        Self { accuracy, error_rate: 1. - accuracy }
    }
}

/// Scores a non-empty feature subset. Implementations are expected to be deterministic for the same
/// subset within one search run.
pub trait FitnessEvaluator: Send + Sync {
    /// Evaluates feature subset and returns its criteria.
    fn evaluate(&self, subset: &FeatureSubset) -> GenericResult<Criteria>;
}
