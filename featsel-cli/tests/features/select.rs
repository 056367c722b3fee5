use crate::extensions::import::read_csv_dataset;
use crate::extensions::select::config::{create_environment, create_evaluator, read_config};
use crate::extensions::select::{SelectionOutput, select_features};
use crate::helpers::{create_separable_csv, create_temp_file};
use featsel_core::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

fn run_from_files(config_json: &str) -> SelectionOutput {
    let dataset = create_temp_file(create_separable_csv(60, true).as_str());
    let config = create_temp_file(config_json);

    let dataset = read_csv_dataset(BufReader::new(File::open(dataset.path()).unwrap()), true).unwrap();
    let config = read_config(BufReader::new(File::open(config.path()).unwrap())).unwrap();

    select_features(Arc::new(dataset), &config, Environment::silent_logger()).unwrap()
}

parameterized_test! {can_select_features_using_full_config, config_json, {
    can_select_features_using_full_config_impl(config_json);
}}

can_select_features_using_full_config! {
    case01_pso_knn: r#"{
        "method": "pso", "numSelected": 2, "iterations": 4, "populationSize": 8, "folds": 3, "seed": 1,
        "parallelism": 2, "useCache": true, "classifier": { "type": "knn", "k": 1 },
        "pso": { "inertiaWeight": 0.7, "c1": 1.5, "c2": 1.5, "minVelocity": -4, "maxVelocity": 4,
                 "startInterval": 0, "endInterval": 1, "theta": 0.5 }
    }"#,
    case02_aco_naive_bayes: r#"{
        "method": "aco", "numSelected": 2, "iterations": 4, "populationSize": 8, "folds": 4, "seed": 2,
        "useCache": false, "classifier": { "type": "naiveBayes" },
        "aco": { "alpha": 1, "beta": 2, "rho": 0.3, "initPheromone": 0.5, "pathSize": 3, "model": "edge" }
    }"#,
    case03_info_gain: r#"{ "method": "infoGain", "numSelected": 3, "classifier": { "type": "naiveBayes" } }"#,
}

fn can_select_features_using_full_config_impl(config_json: &str) {
    let output = run_from_files(config_json);

    assert!(!output.features.is_empty());
    assert!(output.features.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(output.features.iter().all(|&feature| feature < 5));
    assert!((0. ..=1.).contains(&output.fitness));
    assert!(output.evaluations > 0);
}

#[test]
fn can_return_exactly_requested_amount_of_features() {
    (1..=5).for_each(|num_selected| {
        let output = run_from_files(&format!(
            r#"{{ "method": "pso", "numSelected": {num_selected}, "iterations": 3, "populationSize": 6, "seed": 3 }}"#
        ));

        assert_eq!(output.features.len(), num_selected);
    });
}

#[test]
fn can_repeat_run_with_the_same_seed() {
    let config = r#"{ "method": "pso", "numSelected": 2, "iterations": 5, "populationSize": 9, "seed": 42 }"#;

    let first = run_from_files(config);
    let second = run_from_files(config);

    assert_eq!(first.features, second.features);
    assert_eq!(first.fitness, second.fitness);
    assert_eq!(first.evaluations, second.evaluations);
}

parameterized_test! {can_report_accuracy_of_returned_features, (method, num_selected, seed), {
    can_report_accuracy_of_returned_features_impl(method, num_selected, seed);
}}

can_report_accuracy_of_returned_features! {
    case01_pso_single: ("pso", 1, 1),
    case02_pso_most: ("pso", 4, 3),
    case03_pso_half: ("pso", 2, 5),
    case04_aco: ("aco", 2, 7),
}

fn can_report_accuracy_of_returned_features_impl(method: &str, num_selected: usize, seed: u64) {
    let config_json = format!(
        r#"{{ "method": "{method}", "numSelected": {num_selected}, "iterations": 3, "populationSize": 6,
              "folds": 3, "seed": {seed} }}"#
    );
    let content = create_separable_csv(60, false);
    let dataset = Arc::new(read_csv_dataset(BufReader::new(content.as_bytes()), false).unwrap());
    let config = read_config(BufReader::new(config_json.as_bytes())).unwrap();

    let output = select_features(dataset.clone(), &config, Environment::silent_logger()).unwrap();

    let environment = create_environment(&config, Environment::silent_logger());
    let evaluator = create_evaluator(&config, dataset, &environment).unwrap();
    let criteria = evaluator.evaluate(&FeatureSubset::new(output.features.iter().copied())).unwrap();
    assert_eq!(output.features.len(), num_selected);
    assert_eq!(output.fitness, criteria.accuracy);
}
