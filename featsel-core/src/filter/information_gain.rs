#[cfg(test)]
#[path = "../../tests/unit/filter/information_gain_test.rs"]
mod information_gain_test;

use super::*;
use crate::models::Dataset;

/// Scores features by information gain: the reduction of class entropy once the value of the feature
/// is known. Every distinct feature value forms its own partition.
pub struct InformationGain {
    scores: Vec<Float>,
}

impl InformationGain {
    /// Creates a new instance of `InformationGain` computing scores for all features of the dataset.
    pub fn new(dataset: &Dataset) -> Self {
        let all_rows = (0..dataset.size()).collect::<Vec<_>>();
        let system_entropy = entropy(dataset, all_rows.as_slice());

        let scores = (0..dataset.num_features())
            .map(|feature| {
                let mut rows = all_rows.clone();
                rows.sort_by(|&a, &b| {
                    compare_floats(dataset.sample(a).features[feature], dataset.sample(b).features[feature])
                });

                let conditional = rows
                    .chunk_by(|&a, &b| dataset.sample(a).features[feature] == dataset.sample(b).features[feature])
                    .map(|partition| partition.len() as Float / rows.len() as Float * entropy(dataset, partition))
                    .sum::<Float>();

                (system_entropy - conditional).max(0.)
            })
            .collect();

        Self { scores }
    }

    /// Returns scores of all features.
    pub fn scores(&self) -> &[Float] {
        self.scores.as_slice()
    }
}

impl FilterScorer for InformationGain {
    fn num_features(&self) -> usize {
        self.scores.len()
    }

    fn score(&self, feature: usize) -> Float {
        self.scores[feature]
    }
}

fn entropy(dataset: &Dataset, rows: &[usize]) -> Float {
    let total = rows.len() as Float;

    dataset
        .class_counts(rows)
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let probability = count as Float / total;
            -probability * probability.log2()
        })
        .sum()
}
