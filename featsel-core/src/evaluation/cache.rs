#[cfg(test)]
#[path = "../../tests/unit/evaluation/cache_test.rs"]
mod cache_test;

use super::*;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A fitness evaluator which memorizes criteria of already evaluated subsets.
/// Its lifetime is meant to be bound to one search run.
pub struct CachedEvaluator {
    inner: Arc<dyn FitnessEvaluator>,
    cache: Mutex<FxHashMap<FeatureSubset, Criteria>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CachedEvaluator {
    /// Creates a new instance of `CachedEvaluator`.
    pub fn new(inner: Arc<dyn FitnessEvaluator>) -> Self {
        Self { inner, cache: Mutex::default(), hits: AtomicUsize::new(0), misses: AtomicUsize::new(0) }
    }

    /// Returns amount of requests answered from cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns amount of requests passed to inner evaluator.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    fn lookup(&self, subset: &FeatureSubset) -> Option<Criteria> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).get(subset).copied()
    }
}

impl FitnessEvaluator for CachedEvaluator {
    fn evaluate(&self, subset: &FeatureSubset) -> GenericResult<Criteria> {
        if let Some(criteria) = self.lookup(subset) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(criteria);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let criteria = self.inner.evaluate(subset)?;

        self.cache.lock().unwrap_or_else(PoisonError::into_inner).insert(subset.clone(), criteria);

        Ok(criteria)
    }
}
