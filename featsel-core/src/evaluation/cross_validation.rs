#[cfg(test)]
#[path = "../../tests/unit/evaluation/cross_validation_test.rs"]
mod cross_validation_test;

use super::*;
use crate::models::Dataset;
use crate::utils::{GenericError, Random};
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Evaluates feature subsets using stratified k-fold cross validation on a fixed dataset.
/// Fold assignment is done once at construction, so the same subset always gets the same criteria.
pub struct CrossValidation {
    dataset: Arc<Dataset>,
    classifier: Arc<dyn Classifier>,
    folds: Vec<Vec<usize>>,
}

impl CrossValidation {
    /// Creates a new instance of `CrossValidation`.
    pub fn new(
        dataset: Arc<Dataset>,
        classifier: Arc<dyn Classifier>,
        num_folds: usize,
        random: &(dyn Random + Send + Sync),
    ) -> GenericResult<Self> {
        if num_folds < 2 || num_folds > dataset.size() {
            return Err(format!("amount of folds should be in [2, {}], got {num_folds}", dataset.size()).into());
        }

        let folds = create_stratified_folds(dataset.as_ref(), num_folds, random);

        Ok(Self { dataset, classifier, folds })
    }

    /// Returns sample indices per fold.
    pub fn folds(&self) -> &[Vec<usize>] {
        self.folds.as_slice()
    }
}

impl FitnessEvaluator for CrossValidation {
    fn evaluate(&self, subset: &FeatureSubset) -> GenericResult<Criteria> {
        if subset.is_empty() {
            return Err("cannot evaluate an empty feature subset".into());
        }

        subset.validate(self.dataset.num_features())?;

        let correct = self.folds.iter().enumerate().try_fold(0_usize, |correct, (test_idx, test_rows)| {
            let train_rows = self
                .folds
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != test_idx)
                .flat_map(|(_, rows)| rows.iter().copied())
                .collect::<Vec<_>>();

            let model = self.classifier.train(self.dataset.as_ref(), train_rows.as_slice(), subset)?;

            let fold_correct =
                test_rows.iter().map(|&row| self.dataset.sample(row)).filter(|s| model.predict(s) == s.label).count();

            Ok::<_, GenericError>(correct + fold_correct)
        })?;

        Ok(Criteria::from_counts(correct, self.dataset.size()))
    }
}

/// Shuffles samples of each class, then deals them to folds in round-robin manner, so every fold
/// keeps class proportions of the whole dataset.
fn create_stratified_folds(
    dataset: &Dataset,
    num_folds: usize,
    random: &(dyn Random + Send + Sync),
) -> Vec<Vec<usize>> {
    let mut by_class = vec![Vec::<usize>::new(); dataset.num_classes()];
    dataset.samples().iter().enumerate().for_each(|(idx, sample)| by_class[sample.label].push(idx));

    let mut rng = random.get_rng();
    by_class.iter_mut().for_each(|rows| rows.shuffle(&mut rng));

    by_class.into_iter().flatten().enumerate().fold(vec![Vec::new(); num_folds], |mut folds, (position, row)| {
        folds[position % num_folds].push(row);
        folds
    })
}
