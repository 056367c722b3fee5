#[cfg(test)]
#[path = "../../../tests/unit/wrapper/aco/colony_test.rs"]
mod colony_test;

use super::*;
use crate::models::FeatureSubset;
use crate::utils::{Random, compare_floats};
use crate::wrapper::{Elite, SearchStrategy, SubsetScore};

/// A lower bound of normalized heuristic desirability, keeps every feature reachable.
const MIN_HEURISTIC: Float = 0.01;

/// An ant: an ordered construction of chosen features.
#[derive(Clone, Debug)]
pub struct Ant {
    /// Features in the order of their choice.
    pub path: Vec<usize>,
    /// A subset of chosen features.
    pub subset: FeatureSubset,
    /// Fitness of the subset.
    pub fitness: Float,
}

impl Ant {
    fn new(path: Vec<usize>) -> Self {
        Self { subset: path.iter().copied().collect(), path, fitness: 0. }
    }

    fn score(&self) -> SubsetScore {
        SubsetScore::new(self.fitness, self.subset.len())
    }
}

/// A colony of ants searching for feature subsets of a fixed size.
pub struct AntColony {
    config: ColonyConfig,
    dimension: usize,
    path_size: usize,
    heuristic: Vec<Float>,
    pheromone: PheromoneMatrix,
    ants: Vec<Ant>,
    best_ant: Option<Ant>,
}

impl AntColony {
    /// Creates a new instance of `AntColony` which builds paths of `path_size` distinct features.
    /// Heuristic desirability is uniform until it is set with `with_heuristic`.
    pub fn new(config: ColonyConfig, dimension: usize, path_size: usize) -> GenericResult<Self> {
        config.validate()?;

        if dimension == 0 {
            return Err("dimension should be positive".into());
        }

        if path_size == 0 || path_size > dimension {
            return Err(format!("path size should be in [1, {dimension}], got {path_size}").into());
        }

        let pheromone = PheromoneMatrix::new(config.model, dimension, config.init_pheromone);

        let heuristic = vec![1.; dimension];

        Ok(Self { config, dimension, path_size, heuristic, pheromone, ants: vec![], best_ant: None })
    }

    /// Sets heuristic desirability of features from non-negative scores, e.g. information gain.
    /// Scores are normalized by the maximum and bounded from below.
    pub fn with_heuristic(mut self, scores: &[Float]) -> GenericResult<Self> {
        if scores.len() != self.dimension {
            return Err(format!("expected {} heuristic values, got {}", self.dimension, scores.len()).into());
        }

        if scores.iter().any(|score| !score.is_finite() || *score < 0.) {
            return Err("heuristic values should be non-negative finite numbers".into());
        }

        let max = scores.iter().copied().fold(0., Float::max);
        self.heuristic = if max > 0. {
            scores.iter().map(|score| (score / max).max(MIN_HEURISTIC)).collect()
        } else {
            vec![1.; self.dimension]
        };

        Ok(self)
    }

    /// Returns ants of the current generation.
    pub fn ants(&self) -> &[Ant] {
        self.ants.as_slice()
    }

    /// Returns pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Returns normalized heuristic desirability of features.
    pub fn heuristic(&self) -> &[Float] {
        self.heuristic.as_slice()
    }

    /// Evaporates all trails, then every ant of the current generation reinforces its path by its fitness.
    pub fn update_pheromone(&mut self) {
        self.pheromone.evaporate(self.config.rho);
        self.ants.iter().for_each(|ant| self.pheromone.deposit(ant.path.as_slice(), ant.fitness));
    }

    fn construct_generation(&mut self, random: &(dyn Random + Send + Sync)) {
        self.ants = (0..self.config.colony_size).map(|_| Ant::new(self.construct_path(random))).collect();
    }

    fn construct_path(&self, random: &(dyn Random + Send + Sync)) -> Vec<usize> {
        let mut available = (0..self.dimension).collect::<Vec<_>>();
        let mut path = Vec::with_capacity(self.path_size);

        while path.len() < self.path_size {
            let predecessor = path.last().copied();
            let weights = available
                .iter()
                .map(|&feature| {
                    self.pheromone.get(predecessor, feature).powf(self.config.alpha)
                        * self.heuristic[feature].powf(self.config.beta)
                })
                .collect::<Vec<_>>();

            let idx = random.weighted(weights.as_slice());
            path.push(available.remove(idx));
        }

        path
    }
}

impl SearchStrategy for AntColony {
    type Representation = Vec<usize>;

    fn name(&self) -> &str {
        "aco"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn size(&self) -> usize {
        self.config.colony_size
    }

    fn initialize(&mut self, random: &(dyn Random + Send + Sync)) {
        self.pheromone = PheromoneMatrix::new(self.config.model, self.dimension, self.config.init_pheromone);
        self.best_ant = None;
        self.construct_generation(random);
    }

    fn decode(&self) -> Vec<FeatureSubset> {
        self.ants.iter().map(|ant| ant.subset.clone()).collect()
    }

    fn assign_fitness(&mut self, fitness: &[Float]) {
        assert_eq!(fitness.len(), self.ants.len());

        self.ants.iter_mut().zip(fitness.iter()).for_each(|(ant, &fitness)| ant.fitness = fitness);
    }

    /// Promotes the dominant ant of the generation to the colony best.
    fn update_personal_best(&mut self) {
        let Some(idx) = SubsetScore::find_dominant(self.ants.iter().map(Ant::score)) else {
            return;
        };

        let candidate = &self.ants[idx];
        if self.best_ant.as_ref().is_none_or(|best| candidate.score().dominates(&best.score())) {
            self.best_ant = Some(candidate.clone());
        }
    }

    fn best_candidate(&self) -> Option<Elite<Self::Representation>> {
        self.best_ant.as_ref().map(|ant| Elite {
            representation: ant.path.clone(),
            subset: ant.subset.clone(),
            score: ant.score(),
        })
    }

    fn advance(&mut self, _: &Elite<Self::Representation>, random: &(dyn Random + Send + Sync)) {
        self.update_pheromone();
        self.construct_generation(random);
    }

    /// Ranks features of the best path first, then all others; within each group stronger pheromone
    /// intensity comes first, ties are resolved by lower index.
    fn rank_features(&self, best: &Elite<Self::Representation>) -> Vec<usize> {
        let mut features = (0..self.dimension).collect::<Vec<_>>();

        features.sort_by(|&a, &b| {
            best.subset
                .contains(b)
                .cmp(&best.subset.contains(a))
                .then_with(|| compare_floats(self.pheromone.intensity(b), self.pheromone.intensity(a)))
                .then(a.cmp(&b))
        });

        features
    }
}
