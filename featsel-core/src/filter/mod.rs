//! The filter module contains feature scorers which rank every feature independently, without any
//! search over subsets.

#[cfg(test)]
#[path = "../../tests/unit/filter/filter_test.rs"]
mod filter_test;

use crate::utils::{Float, GenericResult, compare_floats};

mod information_gain;
pub use self::information_gain::InformationGain;

/// Scores features independently: the higher the score, the more informative the feature.
pub trait FilterScorer {
    /// Returns amount of scored features.
    fn num_features(&self) -> usize;

    /// Returns a score of the feature.
    fn score(&self, feature: usize) -> Float;

    /// Returns features ranked by score descending, ties are resolved by lower index.
    fn ranked(&self) -> Vec<usize> {
        let mut features = (0..self.num_features()).collect::<Vec<_>>();
        features.sort_by(|&a, &b| compare_floats(self.score(b), self.score(a)).then(a.cmp(&b)));

        features
    }

    /// Selects `num_selected` best ranked features and returns them in ascending order.
    fn select(&self, num_selected: usize) -> GenericResult<Vec<usize>> {
        if num_selected == 0 || num_selected > self.num_features() {
            return Err(format!(
                "amount of selected features should be in [1, {}], got {num_selected}",
                self.num_features()
            )
            .into());
        }

        let mut selected = self.ranked();
        selected.truncate(num_selected);
        selected.sort_unstable();

        Ok(selected)
    }
}
