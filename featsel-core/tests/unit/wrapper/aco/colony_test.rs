use super::*;
use crate::helpers::utils::{FakeRandom, create_test_random};

fn create_colony(colony_size: usize, dimension: usize, path_size: usize) -> AntColony {
    let config = ColonyConfig { colony_size, ..ColonyConfig::default() };

    AntColony::new(config, dimension, path_size).unwrap()
}

#[test]
fn can_construct_paths_of_distinct_features() {
    let mut colony = create_colony(5, 6, 3);

    colony.initialize(create_test_random().as_ref());

    assert_eq!(colony.ants().len(), 5);
    colony.ants().iter().for_each(|ant| {
        assert_eq!(ant.path.len(), 3);
        assert_eq!(ant.subset.len(), 3);
        assert!(ant.path.iter().all(|&feature| feature < 6 && ant.subset.contains(feature)));
    });
    assert_eq!(colony.decode().len(), 5);
}

#[test]
fn can_choose_features_by_roulette_wheel() {
    let mut colony = create_colony(1, 3, 2);

    colony.initialize(&FakeRandom::new(vec![], vec![0.45, 0.1]));

    assert_eq!(colony.ants()[0].path, vec![2, 0]);
    assert_eq!(colony.decode()[0].indices(), &[0, 2]);
}

#[test]
fn can_build_full_path_when_all_features_requested() {
    let mut colony = create_colony(3, 4, 4);

    colony.initialize(create_test_random().as_ref());

    colony.ants().iter().for_each(|ant| assert_eq!(ant.subset.indices(), &[0, 1, 2, 3]));
}

#[test]
fn can_normalize_heuristic() {
    let colony = create_colony(1, 4, 1).with_heuristic(&[0., 2., 4., 1.]).unwrap();

    assert_eq!(colony.heuristic(), &[0.01, 0.5, 1., 0.25]);
}

#[test]
fn can_use_uniform_heuristic_when_all_scores_are_zero() {
    let colony = create_colony(1, 3, 1).with_heuristic(&[0., 0., 0.]).unwrap();

    assert_eq!(colony.heuristic(), &[1., 1., 1.]);
}

parameterized_test! {can_reject_invalid_heuristic, (scores, expected), {
    can_reject_invalid_heuristic_impl(scores, expected);
}}

can_reject_invalid_heuristic! {
    case01_wrong_length: (vec![1., 2.], "expected 3 heuristic values, got 2"),
    case02_negative: (vec![1., -2., 0.], "heuristic values should be non-negative finite numbers"),
    case03_infinite: (vec![1., Float::INFINITY, 0.], "heuristic values should be non-negative finite numbers"),
}

fn can_reject_invalid_heuristic_impl(scores: Vec<Float>, expected: &str) {
    let result = create_colony(1, 3, 1).with_heuristic(scores.as_slice());

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}

#[test]
fn can_evaporate_and_deposit_pheromone() {
    let mut colony = create_colony(2, 3, 1);
    colony.initialize(&FakeRandom::new(vec![], vec![0.1, 0.5]));
    assert_eq!(colony.ants()[0].path, vec![0]);
    assert_eq!(colony.ants()[1].path, vec![2]);

    colony.assign_fitness(&[0.5, 0.25]);
    colony.update_pheromone();

    let expected = [0.66, 0.16, 0.41];
    colony.pheromone().values().iter().zip(expected.iter()).for_each(|(actual, expected)| {
        assert!((actual - expected).abs() < 1E-9);
    });
}

#[test]
fn can_keep_best_ant_across_generations() {
    let mut colony = create_colony(2, 4, 2);
    colony.initialize(create_test_random().as_ref());
    assert!(colony.best_candidate().is_none());

    colony.ants = vec![Ant::new(vec![1, 3]), Ant::new(vec![0, 2])];
    colony.assign_fitness(&[0.5, 0.75]);
    colony.update_personal_best();

    colony.ants = vec![Ant::new(vec![1, 2]), Ant::new(vec![3, 0])];
    colony.assign_fitness(&[0.75, 0.5]);
    colony.update_personal_best();

    let elite = colony.best_candidate().unwrap();
    assert_eq!(elite.representation, vec![0, 2]);
    assert_eq!(elite.subset.indices(), &[0, 2]);
    assert_eq!(elite.score, SubsetScore::new(0.75, 2));
}

#[test]
fn can_reset_state_on_initialize() {
    let mut colony = create_colony(2, 4, 2);
    colony.initialize(create_test_random().as_ref());
    colony.assign_fitness(&[0.5, 0.75]);
    colony.update_personal_best();
    colony.update_pheromone();

    colony.initialize(create_test_random().as_ref());

    assert!(colony.best_candidate().is_none());
    assert!(colony.pheromone().values().iter().all(|&value| value == 0.2));
}

#[test]
fn can_rank_best_subset_first_then_by_intensity() {
    let mut colony = create_colony(1, 5, 2);
    colony.pheromone.deposit(&[0], 1.);
    colony.pheromone.deposit(&[1], 0.5);
    let best = Elite {
        representation: vec![3, 1],
        subset: FeatureSubset::new(vec![3, 1]),
        score: SubsetScore::new(0.9, 2),
    };

    assert_eq!(colony.rank_features(&best), vec![1, 3, 0, 2, 4]);
}

parameterized_test! {can_reject_invalid_colony, (config, dimension, path_size, expected), {
    can_reject_invalid_colony_impl(config, dimension, path_size, expected);
}}

can_reject_invalid_colony! {
    case01_empty_colony: (ColonyConfig { colony_size: 0, ..ColonyConfig::default() }, 3, 1,
        "colony size should be positive"),
    case02_bad_rho: (ColonyConfig { rho: 1.5, ..ColonyConfig::default() }, 3, 1,
        "evaporation rate should be in [0, 1], got 1.5"),
    case03_negative_alpha: (ColonyConfig { alpha: -1., ..ColonyConfig::default() }, 3, 1,
        "alpha and beta should be non-negative, got -1 and 1"),
    case04_no_dimension: (ColonyConfig::default(), 0, 1, "dimension should be positive"),
    case05_empty_path: (ColonyConfig::default(), 3, 0, "path size should be in [1, 3], got 0"),
    case06_long_path: (ColonyConfig::default(), 3, 4, "path size should be in [1, 3], got 4"),
}

fn can_reject_invalid_colony_impl(config: ColonyConfig, dimension: usize, path_size: usize, expected: &str) {
    let result = AntColony::new(config, dimension, path_size);

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}
