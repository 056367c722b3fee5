#[cfg(test)]
#[path = "../../tests/unit/wrapper/engine_test.rs"]
mod engine_test;

use super::telemetry::Telemetry;
use super::*;
use crate::evaluation::{CachedEvaluator, FitnessEvaluator};
use crate::utils::{Environment, GenericResult, ThreadPool, Timer, parallel_collect};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Specifies run invariants of the wrapper search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Amount of iterations: there is no early stopping.
    pub max_iterations: usize,
    /// Amount of features to return.
    pub num_selected: usize,
    /// Memorize fitness of already evaluated subsets during the run.
    pub use_cache: bool,
}

impl SearchConfig {
    /// Creates a new instance of `SearchConfig` with cache enabled.
    pub fn new(max_iterations: usize, num_selected: usize) -> Self {
        Self { max_iterations, num_selected, use_cache: true }
    }
}

/// A result of the wrapper search.
#[derive(Clone, Debug)]
pub struct SelectionResult {
    /// Selected feature indices: ascending, unique, exactly of requested size.
    pub features: Vec<usize>,
    /// Fitness of selected features.
    pub fitness: Float,
    /// A feature subset decoded from the global best representation.
    pub best_subset: FeatureSubset,
    /// Fitness of the global best subset.
    pub best_fitness: Float,
    /// Amount of actual evaluator invocations.
    pub evaluations: usize,
    /// Per iteration metrics.
    pub history: Vec<IterationMetrics>,
}

/// A population engine which drives a search strategy for a fixed amount of iterations and keeps
/// track of the global best. One instance corresponds to one run: all search state is owned here.
pub struct WrapperSearch<S: SearchStrategy> {
    strategy: S,
    evaluator: Arc<dyn FitnessEvaluator>,
    config: SearchConfig,
    environment: Arc<Environment>,
    global_best: Option<Elite<S::Representation>>,
}

impl<S: SearchStrategy> WrapperSearch<S> {
    /// Creates a new instance of `WrapperSearch`.
    pub fn new(
        strategy: S,
        evaluator: Arc<dyn FitnessEvaluator>,
        config: SearchConfig,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        if config.max_iterations == 0 {
            return Err("amount of iterations should be positive".into());
        }

        if config.num_selected == 0 || config.num_selected > strategy.dimension() {
            return Err(format!(
                "amount of selected features should be in [1, {}], got {}",
                strategy.dimension(),
                config.num_selected
            )
            .into());
        }

        if strategy.size() == 0 {
            return Err("population size should be positive".into());
        }

        Ok(Self { strategy, evaluator, config, environment, global_best: None })
    }

    /// Runs the search and returns exactly `num_selected` features ranked from the global best.
    /// Any evaluation failure aborts the run.
    pub fn run(mut self) -> GenericResult<SelectionResult> {
        let cache = self.config.use_cache.then(|| Arc::new(CachedEvaluator::new(self.evaluator.clone())));
        let evaluator: Arc<dyn FitnessEvaluator> = match &cache {
            Some(cache) => cache.clone(),
            None => self.evaluator.clone(),
        };
        let pool = ThreadPool::new(self.environment.parallelism)?;
        let mut telemetry = Telemetry::new(self.environment.logger.clone());

        telemetry.on_start(
            self.strategy.name(),
            self.strategy.size(),
            self.strategy.dimension(),
            self.config.max_iterations,
        );

        self.strategy.initialize(self.environment.random.as_ref());

        let mut requested = 0;
        for iteration in 0..self.config.max_iterations {
            let timer = Timer::start();

            let evaluations = self.evaluate_fitness(evaluator.as_ref(), &pool)?;
            self.strategy.update_personal_best();
            let is_improvement = self.update_global_best();

            let global_best = self.global_best.as_ref().ok_or("search has no candidates to track")?;
            telemetry.on_iteration(IterationMetrics {
                number: iteration,
                best: global_best.score,
                is_improvement,
                evaluations,
                duration: timer.elapsed_millis(),
            });
            requested += evaluations;

            if iteration + 1 < self.config.max_iterations {
                self.strategy.advance(global_best, self.environment.random.as_ref());
            }
        }

        let global_best = self.global_best.take().ok_or("search has no candidates to track")?;
        let features = self.select_features(&global_best)?;

        // trimmed or padded selection differs from the global best and has to be evaluated separately
        let fitness = if features.as_slice() == global_best.subset.indices() {
            global_best.score.fitness
        } else {
            requested += 1;
            evaluator.evaluate(&FeatureSubset::new(features.iter().copied()))?.accuracy
        };

        let evaluations = cache.map_or(requested, |cache| cache.misses());
        let history = telemetry.on_result(features.as_slice(), evaluations);

        Ok(SelectionResult {
            features,
            fitness,
            best_subset: global_best.subset,
            best_fitness: global_best.score.fitness,
            evaluations,
            history,
        })
    }

    /// Evaluates all candidates in parallel, an empty subset gets zero fitness without evaluation.
    /// Returns amount of evaluator requests.
    fn evaluate_fitness(&mut self, evaluator: &dyn FitnessEvaluator, pool: &ThreadPool) -> GenericResult<usize> {
        let subsets = self.strategy.decode();

        let requests = if self.config.use_cache {
            let mut seen = FxHashSet::default();
            subsets.iter().filter(|subset| !subset.is_empty() && seen.insert(*subset)).collect::<Vec<_>>()
        } else {
            subsets.iter().filter(|subset| !subset.is_empty()).collect::<Vec<_>>()
        };

        let accuracies = pool
            .execute(|| parallel_collect(requests.as_slice(), |subset| evaluator.evaluate(subset)))
            .into_iter()
            .zip(requests.iter())
            .map(|(criteria, subset)| criteria.map(|criteria| (*subset, criteria.accuracy)))
            .collect::<GenericResult<FxHashMap<_, _>>>()?;

        let fitness = subsets
            .iter()
            .map(|subset| if subset.is_empty() { 0. } else { accuracies.get(subset).copied().unwrap_or(0.) })
            .collect::<Vec<_>>();

        self.strategy.assign_fitness(fitness.as_slice());

        Ok(requests.len())
    }

    /// Promotes the dominant personal best to the global best on strict dominance only.
    fn update_global_best(&mut self) -> bool {
        let Some(candidate) = self.strategy.best_candidate() else {
            return false;
        };

        let is_improvement = self.global_best.as_ref().is_none_or(|best| candidate.score.dominates(&best.score));
        if is_improvement {
            self.global_best = Some(candidate);
        }

        is_improvement
    }

    fn select_features(&self, global_best: &Elite<S::Representation>) -> GenericResult<Vec<usize>> {
        let mut features = self.strategy.rank_features(global_best);

        if features.len() < self.config.num_selected {
            return Err(format!(
                "cannot select {} features: only {} are ranked",
                self.config.num_selected,
                features.len()
            )
            .into());
        }

        features.truncate(self.config.num_selected);
        features.sort_unstable();

        Ok(features)
    }
}
