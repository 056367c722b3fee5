use super::*;
use crate::helpers::utils::FakeRandom;

#[test]
fn can_produce_repeatable_sequence() {
    let sample = |random: DefaultRandom| (0..10).map(|_| random.uniform_real(0., 1.)).collect::<Vec<_>>();

    let first = sample(DefaultRandom::new_repeatable(7));
    let second = sample(DefaultRandom::new_repeatable(7));

    assert_eq!(first, second);
}

#[test]
fn can_keep_values_in_range() {
    let random = DefaultRandom::new_repeatable(1);

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-2, 3);
        let real = random.uniform_real(-0.5, 0.5);

        assert!((-2..=3).contains(&int));
        assert!((-0.5..0.5).contains(&real));
    });
}

#[test]
fn can_return_same_value_for_degenerated_interval() {
    let random = DefaultRandom::new_repeatable(1);

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.3, 0.3), 0.3);
}

parameterized_test! {can_select_weighted_index, (weights, draw, expected), {
    can_select_weighted_index_impl(weights, draw, expected);
}}

can_select_weighted_index! {
    case01_first: (vec![1., 2., 3.], 0.5, 0),
    case02_second: (vec![1., 2., 3.], 1.5, 1),
    case03_third: (vec![1., 2., 3.], 5.9, 2),
    case04_skip_zero: (vec![0., 2., 0., 1.], 2.5, 3),
}

fn can_select_weighted_index_impl(weights: Vec<f64>, draw: f64, expected: usize) {
    let random = FakeRandom::new(vec![], vec![draw]);

    let idx = random.weighted(weights.as_slice());

    assert_eq!(idx, expected);
}

#[test]
fn can_select_uniformly_when_all_weights_are_zero() {
    let random = FakeRandom::new(vec![2], vec![]);

    assert_eq!(random.weighted(&[0., 0., 0.]), 2);
}

#[test]
fn can_return_weights_proportionally() {
    let random = DefaultRandom::new_repeatable(3);
    let weights = &[100., 50., 20.];
    let experiments = 10000_usize;
    let total_sum = weights.iter().sum::<f64>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| counter[random.weighted(weights)] += 1);

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as f64 / experiments as f64;
        let expected_ratio = *weight / total_sum;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}
