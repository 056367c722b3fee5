use crate::evaluation::{Criteria, FitnessEvaluator};
use crate::models::FeatureSubset;
use crate::utils::{Float, GenericResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fitness function used by fake evaluator.
pub type FakeFitnessFn = Arc<dyn Fn(&FeatureSubset) -> Float + Send + Sync>;

/// An evaluator which counts its invocations and remembers whether it was called with an empty subset.
pub struct FakeEvaluator {
    fitness_fn: FakeFitnessFn,
    calls: AtomicUsize,
    empty_calls: AtomicUsize,
}

impl FakeEvaluator {
    pub fn new(fitness_fn: FakeFitnessFn) -> Self {
        Self { fitness_fn, calls: AtomicUsize::new(0), empty_calls: AtomicUsize::new(0) }
    }

    /// Rewards features from the target set and penalizes every other selected feature.
    pub fn with_target(target: Vec<usize>) -> Self {
        Self::new(Arc::new(move |subset: &FeatureSubset| {
            let hits = subset.indices().iter().filter(|idx| target.contains(idx)).count() as Float;
            let misses = subset.len() as Float - hits;

            (hits / target.len() as Float - 0.05 * misses).clamp(0., 1.)
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn empty_calls(&self) -> usize {
        self.empty_calls.load(Ordering::Relaxed)
    }
}

impl FitnessEvaluator for FakeEvaluator {
    fn evaluate(&self, subset: &FeatureSubset) -> GenericResult<Criteria> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if subset.is_empty() {
            self.empty_calls.fetch_add(1, Ordering::Relaxed);
        }

        let accuracy = (self.fitness_fn)(subset);

        Ok(Criteria { accuracy, error_rate: 1. - accuracy })
    }
}

/// An evaluator which always fails.
pub struct FailingEvaluator;

impl FitnessEvaluator for FailingEvaluator {
    fn evaluate(&self, _: &FeatureSubset) -> GenericResult<Criteria> {
        Err("classifier training failed".into())
    }
}
