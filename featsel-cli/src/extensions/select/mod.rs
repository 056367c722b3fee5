//! Runs feature subset selection with the method specified by configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/select/select_test.rs"]
mod select_test;

pub mod config;

use self::config::*;
use featsel_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::sync::Arc;

/// A selection outcome.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SelectionOutput {
    /// Selected feature indices in ascending order.
    pub features: Vec<usize>,
    /// Cross validated accuracy of the selected features.
    pub fitness: Float,
    /// Amount of subset evaluations.
    pub evaluations: usize,
}

/// Selects features of the dataset using configured method.
pub fn select_features(dataset: Arc<Dataset>, config: &Config, logger: InfoLogger) -> GenericResult<SelectionOutput> {
    let num_features = dataset.num_features();
    let environment = Arc::new(create_environment(config, logger));
    let search_config = create_search_config(config, num_features);
    let evaluator = create_evaluator(config, dataset.clone(), environment.as_ref())?;

    match get_method(config) {
        MethodType::Pso => {
            let swarm = ParticleSwarm::new(create_swarm_config(config), num_features)?;

            run_wrapper(swarm, evaluator, search_config, environment)
        }
        MethodType::Aco => {
            let path_size = get_path_size(config, search_config.num_selected);
            let heuristic = InformationGain::new(dataset.as_ref());
            let colony = AntColony::new(create_colony_config(config), num_features, path_size)?
                .with_heuristic(heuristic.scores())?;

            run_wrapper(colony, evaluator, search_config, environment)
        }
        MethodType::InfoGain => {
            let features = InformationGain::new(dataset.as_ref()).select(search_config.num_selected)?;
            let criteria = evaluator.evaluate(&FeatureSubset::new(features.iter().copied()))?;

            (environment.logger)(&format!(
                "information gain selected features: [{}], accuracy: {:.5}",
                features.iter().map(|feature| feature.to_string()).collect::<Vec<_>>().join(","),
                criteria.accuracy
            ));

            Ok(SelectionOutput { features, fitness: criteria.accuracy, evaluations: 1 })
        }
    }
}

/// Writes selection output as json.
pub fn write_output<W: Write>(output: &SelectionOutput, mut writer: BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, output).map_err(|err| format!("cannot write result: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

fn run_wrapper<S: SearchStrategy>(
    strategy: S,
    evaluator: Arc<dyn FitnessEvaluator>,
    search_config: SearchConfig,
    environment: Arc<Environment>,
) -> GenericResult<SelectionOutput> {
    let result = WrapperSearch::new(strategy, evaluator, search_config, environment)?.run()?;

    Ok(SelectionOutput { features: result.features, fitness: result.fitness, evaluations: result.evaluations })
}
