//! Selection configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/select/config_test.rs"]
mod config_test;

use featsel_core::prelude::*;
use featsel_core::utils::get_cpus;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use std::sync::Arc;

/// A selection run configuration, every missing value takes its default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Selection method. Default is `pso`.
    pub method: Option<MethodType>,
    /// Amount of features to select. Default is a half of all features.
    pub num_selected: Option<usize>,
    /// Amount of search iterations. Default is 20.
    pub iterations: Option<usize>,
    /// Amount of particles or ants. Default is 30.
    pub population_size: Option<usize>,
    /// Amount of cross validation folds. Default is 5.
    pub folds: Option<usize>,
    /// A random seed, runs are repeatable when it is set.
    pub seed: Option<u64>,
    /// Amount of threads used to evaluate candidates. Default is number of cpus.
    pub parallelism: Option<usize>,
    /// Whether to memorize fitness of evaluated subsets. Default is true.
    pub use_cache: Option<bool>,
    /// A classifier used to score feature subsets.
    pub classifier: Option<ClassifierType>,
    /// Particle swarm parameters.
    pub pso: Option<SwarmParams>,
    /// Ant colony parameters.
    pub aco: Option<ColonyParams>,
}

/// Specifies a selection method.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MethodType {
    /// Particle swarm optimization wrapper.
    Pso,
    /// Ant colony optimization wrapper.
    Aco,
    /// Information gain filter.
    InfoGain,
}

impl FromStr for MethodType {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pso" => Ok(MethodType::Pso),
            "aco" => Ok(MethodType::Aco),
            "infoGain" => Ok(MethodType::InfoGain),
            _ => Err(format!("unknown selection method: '{value}'").into()),
        }
    }
}

/// Specifies a classifier used within cross validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum ClassifierType {
    /// K nearest neighbours.
    #[serde(rename(deserialize = "knn"))]
    Knn {
        /// Amount of neighbours. Default is 3.
        k: Option<usize>,
    },

    /// Gaussian naive bayes.
    #[serde(rename(deserialize = "naiveBayes"))]
    NaiveBayes,
}

/// Particle swarm parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmParams {
    /// Inertia weight. Default is 0.7298.
    pub inertia_weight: Option<Float>,
    /// Personal best attraction. Default is 1.49618.
    pub c1: Option<Float>,
    /// Global best attraction. Default is 1.49618.
    pub c2: Option<Float>,
    /// Lower velocity bound. Default is -6.
    pub min_velocity: Option<Float>,
    /// Upper velocity bound. Default is 6.
    pub max_velocity: Option<Float>,
    /// Lower position bound. Default is 0.
    pub start_interval: Option<Float>,
    /// Upper position bound. Default is 1.
    pub end_interval: Option<Float>,
    /// Selection threshold. Default is 0.6.
    pub theta: Option<Float>,
}

/// Ant colony parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColonyParams {
    /// Pheromone importance. Default is 1.
    pub alpha: Option<Float>,
    /// Heuristic importance. Default is 1.
    pub beta: Option<Float>,
    /// Evaporation rate. Default is 0.2.
    pub rho: Option<Float>,
    /// Initial pheromone. Default is 0.2.
    pub init_pheromone: Option<Float>,
    /// Amount of features in every ant path. Default is amount of selected features.
    pub path_size: Option<usize>,
    /// Pheromone attachment. Default is `feature`.
    pub model: Option<PheromoneModelType>,
}

/// Specifies what pheromone is attached to.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PheromoneModelType {
    /// A trail per feature.
    Feature,
    /// A trail per pair of consecutively chosen features.
    Edge,
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Returns selection method.
pub fn get_method(config: &Config) -> MethodType {
    config.method.unwrap_or(MethodType::Pso)
}

/// Returns amount of features to select for a dataset with given amount of features.
pub fn get_num_selected(config: &Config, num_features: usize) -> usize {
    config.num_selected.unwrap_or(num_features.div_ceil(2))
}

/// Returns amount of ant path features.
pub fn get_path_size(config: &Config, num_selected: usize) -> usize {
    config.aco.as_ref().and_then(|aco| aco.path_size).unwrap_or(num_selected)
}

/// Creates a search configuration.
pub fn create_search_config(config: &Config, num_features: usize) -> SearchConfig {
    SearchConfig {
        max_iterations: config.iterations.unwrap_or(20),
        num_selected: get_num_selected(config, num_features),
        use_cache: config.use_cache.unwrap_or(true),
    }
}

/// Creates a particle swarm configuration.
pub fn create_swarm_config(config: &Config) -> SwarmConfig {
    let defaults = SwarmConfig::default();
    let params = config.pso.clone().unwrap_or_default();

    SwarmConfig {
        population_size: config.population_size.unwrap_or(defaults.population_size),
        inertia_weight: params.inertia_weight.unwrap_or(defaults.inertia_weight),
        c1: params.c1.unwrap_or(defaults.c1),
        c2: params.c2.unwrap_or(defaults.c2),
        min_velocity: params.min_velocity.unwrap_or(defaults.min_velocity),
        max_velocity: params.max_velocity.unwrap_or(defaults.max_velocity),
        start_interval: params.start_interval.unwrap_or(defaults.start_interval),
        end_interval: params.end_interval.unwrap_or(defaults.end_interval),
        theta: params.theta.unwrap_or(defaults.theta),
    }
}

/// Creates an ant colony configuration.
pub fn create_colony_config(config: &Config) -> ColonyConfig {
    let defaults = ColonyConfig::default();
    let params = config.aco.clone().unwrap_or_default();

    ColonyConfig {
        colony_size: config.population_size.unwrap_or(defaults.colony_size),
        alpha: params.alpha.unwrap_or(defaults.alpha),
        beta: params.beta.unwrap_or(defaults.beta),
        rho: params.rho.unwrap_or(defaults.rho),
        init_pheromone: params.init_pheromone.unwrap_or(defaults.init_pheromone),
        model: match params.model {
            Some(PheromoneModelType::Edge) => PheromoneModel::Edge,
            Some(PheromoneModelType::Feature) => PheromoneModel::Feature,
            None => defaults.model,
        },
    }
}

/// Creates a classifier, k nearest neighbours with `k = 3` is used by default.
pub fn create_classifier(config: &Config) -> GenericResult<Arc<dyn Classifier>> {
    Ok(match config.classifier {
        Some(ClassifierType::Knn { k }) => Arc::new(KNearestNeighbors::new(k.unwrap_or(3))?),
        Some(ClassifierType::NaiveBayes) => Arc::new(GaussianNaiveBayes::default()),
        None => Arc::new(KNearestNeighbors::new(3)?),
    })
}

/// Creates a cross validation evaluator for the dataset.
pub fn create_evaluator(
    config: &Config,
    dataset: Arc<Dataset>,
    environment: &Environment,
) -> GenericResult<Arc<dyn FitnessEvaluator>> {
    let classifier = create_classifier(config)?;
    let folds = config.folds.unwrap_or(5);

    Ok(Arc::new(CrossValidation::new(dataset, classifier, folds, environment.random.as_ref())?))
}

/// Creates an environment: random is repeatable when seed is specified.
pub fn create_environment(config: &Config, logger: InfoLogger) -> Environment {
    let random: Arc<dyn Random + Send + Sync> = match config.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    Environment::new(random, config.parallelism.unwrap_or_else(get_cpus), logger)
}
