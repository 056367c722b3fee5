#[cfg(test)]
#[path = "../../../tests/unit/wrapper/aco/pheromone_test.rs"]
mod pheromone_test;

use crate::utils::Float;

/// Specifies what a pheromone trail is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PheromoneModel {
    /// A trail per feature: desirability of a feature does not depend on previous choice.
    Feature,
    /// A trail per (predecessor, feature) edge; the first choice of a path reads a virtual start node.
    Edge,
}

/// Keeps pheromone intensities, all of them are non-negative.
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    model: PheromoneModel,
    dimension: usize,
    values: Vec<Float>,
}

impl PheromoneMatrix {
    /// Creates a new instance of `PheromoneMatrix` with all trails set to the initial value.
    pub fn new(model: PheromoneModel, dimension: usize, initial: Float) -> Self {
        let rows = match model {
            PheromoneModel::Feature => 1,
            PheromoneModel::Edge => dimension + 1,
        };

        Self { model, dimension, values: vec![initial.max(0.); rows * dimension] }
    }

    /// Returns pheromone intensity of choosing the feature after the predecessor.
    pub fn get(&self, predecessor: Option<usize>, feature: usize) -> Float {
        self.values[self.index(predecessor, feature)]
    }

    /// Returns all intensities in row-major order.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    /// Decays all trails by `(1 - rho)` factor.
    pub fn evaporate(&mut self, rho: Float) {
        let factor = (1. - rho).clamp(0., 1.);
        self.values.iter_mut().for_each(|value| *value *= factor);
    }

    /// Reinforces trails along the path by given amount, negative amounts are ignored.
    pub fn deposit(&mut self, path: &[usize], amount: Float) {
        if amount.is_nan() || amount <= 0. {
            return;
        }

        let mut predecessor = None;
        for &feature in path {
            let index = self.index(predecessor, feature);
            self.values[index] += amount;
            predecessor = Some(feature);
        }
    }

    /// Returns total intensity attracting ants to the feature.
    pub fn intensity(&self, feature: usize) -> Float {
        match self.model {
            PheromoneModel::Feature => self.values[feature],
            PheromoneModel::Edge => (0..=self.dimension).map(|row| self.values[row * self.dimension + feature]).sum(),
        }
    }

    fn index(&self, predecessor: Option<usize>, feature: usize) -> usize {
        match self.model {
            PheromoneModel::Feature => feature,
            PheromoneModel::Edge => predecessor.unwrap_or(self.dimension) * self.dimension + feature,
        }
    }
}
