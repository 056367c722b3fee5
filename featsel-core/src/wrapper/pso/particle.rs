use crate::models::FeatureSubset;
use crate::utils::Float;
use crate::wrapper::SubsetScore;

/// A particle of the swarm.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Current position, one coordinate per feature.
    pub position: Vec<Float>,
    /// Current velocity, one coordinate per feature.
    pub velocity: Vec<Float>,
    /// A position with the best fitness known to this particle.
    pub personal_best: Vec<Float>,
    /// Fitness of the current position.
    pub fitness: Float,
    /// Fitness of the personal best, negative infinity until the first evaluation.
    pub personal_best_fitness: Float,
}

impl Particle {
    /// Creates a new instance of `Particle` at given position.
    pub fn new(position: Vec<Float>, velocity: Vec<Float>) -> Self {
        let personal_best = position.clone();

        Self { position, velocity, personal_best, fitness: 0., personal_best_fitness: Float::NEG_INFINITY }
    }

    /// Decodes position into a feature subset: feature is selected iff its coordinate is above theta.
    pub fn decode(position: &[Float], theta: Float) -> FeatureSubset {
        FeatureSubset::from_mask(position.iter().map(|&value| value > theta))
    }

    /// Returns amount of features selected by position.
    pub fn count_selected(position: &[Float], theta: Float) -> usize {
        position.iter().filter(|&&value| value > theta).count()
    }

    /// Returns score of the current position.
    pub fn score(&self, theta: Float) -> SubsetScore {
        SubsetScore::new(self.fitness, Self::count_selected(self.position.as_slice(), theta))
    }

    /// Returns score of the personal best.
    pub fn personal_best_score(&self, theta: Float) -> SubsetScore {
        SubsetScore::new(self.personal_best_fitness, Self::count_selected(self.personal_best.as_slice(), theta))
    }
}
