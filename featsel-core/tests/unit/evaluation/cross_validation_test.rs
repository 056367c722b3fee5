use super::*;
use crate::evaluation::KNearestNeighbors;
use crate::helpers::models::create_separable_dataset;
use crate::helpers::utils::create_test_random;

fn create_cross_validation(size: usize, folds: usize) -> GenericResult<CrossValidation> {
    let dataset = Arc::new(create_separable_dataset(size));
    let random = create_test_random();

    CrossValidation::new(dataset, Arc::new(KNearestNeighbors::new(1)?), folds, random.as_ref())
}

#[test]
fn can_create_stratified_folds() {
    let evaluator = create_cross_validation(20, 5).unwrap();

    let folds = evaluator.folds();

    assert_eq!(folds.len(), 5);
    folds.iter().for_each(|fold| {
        assert_eq!(fold.len(), 4);
        assert_eq!(evaluator.dataset.class_counts(fold.as_slice()), vec![2, 2]);
    });
    let mut all = folds.iter().flatten().copied().collect::<Vec<_>>();
    all.sort_unstable();
    assert_eq!(all, (0..20).collect::<Vec<_>>());
}

#[test]
fn can_get_perfect_accuracy_for_separating_feature() {
    let evaluator = create_cross_validation(24, 4).unwrap();

    let criteria = evaluator.evaluate(&FeatureSubset::new(vec![0])).unwrap();

    assert_eq!(criteria, Criteria { accuracy: 1., error_rate: 0. });
}

#[test]
fn can_get_worse_accuracy_for_uninformative_feature() {
    let evaluator = create_cross_validation(24, 4).unwrap();

    let informative = evaluator.evaluate(&FeatureSubset::new(vec![0])).unwrap();
    let constant = evaluator.evaluate(&FeatureSubset::new(vec![1])).unwrap();

    assert!(constant.accuracy < informative.accuracy);
}

#[test]
fn can_return_same_criteria_for_same_subset() {
    let evaluator = create_cross_validation(24, 3).unwrap();
    let subset = FeatureSubset::new(vec![1, 2]);

    assert_eq!(evaluator.evaluate(&subset).unwrap(), evaluator.evaluate(&subset).unwrap());
}

parameterized_test! {can_validate_fold_count, (size, folds, is_ok), {
    can_validate_fold_count_impl(size, folds, is_ok);
}}

can_validate_fold_count! {
    case01_one_fold: (10, 1, false),
    case02_two_folds: (10, 2, true),
    case03_leave_one_out: (10, 10, true),
    case04_too_many_folds: (10, 11, false),
}

fn can_validate_fold_count_impl(size: usize, folds: usize, is_ok: bool) {
    assert_eq!(create_cross_validation(size, folds).is_ok(), is_ok);
}

#[test]
fn can_reject_empty_and_out_of_range_subsets() {
    let evaluator = create_cross_validation(12, 3).unwrap();

    assert!(evaluator.evaluate(&FeatureSubset::default()).is_err());
    assert!(evaluator.evaluate(&FeatureSubset::new(vec![3])).is_err());
}
