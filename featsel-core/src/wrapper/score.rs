#[cfg(test)]
#[path = "../../tests/unit/wrapper/score_test.rs"]
mod score_test;

use crate::utils::Float;

/// A (fitness, subset size) pair which defines best tracking order: higher fitness wins,
/// on equal fitness a smaller subset wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubsetScore {
    /// A fitness value, higher is better.
    pub fitness: Float,
    /// Amount of selected features, smaller is better.
    pub size: usize,
}

impl SubsetScore {
    /// Creates a new instance of `SubsetScore`.
    pub fn new(fitness: Float, size: usize) -> Self {
        Self { fitness, size }
    }

    /// Returns true if this score strictly dominates the other one.
    pub fn dominates(&self, other: &SubsetScore) -> bool {
        #[allow(clippy::float_cmp)]
        let is_same_fitness = self.fitness == other.fitness;

        self.fitness > other.fitness || (is_same_fitness && self.size < other.size)
    }

    /// Returns index of the first dominant score: a later score replaces the current choice only when
    /// it strictly dominates it.
    pub fn find_dominant(scores: impl IntoIterator<Item = SubsetScore>) -> Option<usize> {
        scores
            .into_iter()
            .enumerate()
            .fold(None, |best: Option<(usize, SubsetScore)>, (idx, score)| match best {
                Some((_, best_score)) if !score.dominates(&best_score) => best,
                _ => Some((idx, score)),
            })
            .map(|(idx, _)| idx)
    }
}
