use super::*;
use crate::helpers::models::{create_dataset_from, create_separable_dataset};

#[test]
fn can_score_separating_constant_and_noise_features() {
    let dataset = create_separable_dataset(12);

    let scorer = InformationGain::new(&dataset);

    assert_eq!(scorer.num_features(), 3);
    assert!((scorer.score(0) - 1.).abs() < 1E-12);
    assert_eq!(scorer.score(1), 0.);
    assert!(scorer.score(2).abs() < 1E-12);
    assert_eq!(scorer.select(1).unwrap(), vec![0]);
}

#[test]
fn can_compute_partial_information_gain() {
    // feature value 0 -> classes [0, 0], value 1 -> classes [0, 1]
    let dataset = create_dataset_from(&[(&[0.], 0), (&[0.], 0), (&[1.], 0), (&[1.], 1)], 2);
    let system_entropy = -(0.75 * 0.75_f64.log2() + 0.25 * 0.25_f64.log2());
    let expected = system_entropy - 0.5 * 1.;

    let scorer = InformationGain::new(&dataset);

    assert!((scorer.scores()[0] - expected).abs() < 1E-12);
}

#[test]
fn can_get_zero_gain_for_single_class() {
    let dataset = create_dataset_from(&[(&[0., 3.], 0), (&[1., 4.], 0), (&[2., 5.], 0)], 1);

    let scorer = InformationGain::new(&dataset);

    assert_eq!(scorer.scores(), &[0., 0.]);
}
