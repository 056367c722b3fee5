#[cfg(test)]
#[path = "../../tests/unit/commands/select_test.rs"]
mod select_test;

use super::*;

use featsel_cli::extensions::import::read_csv_dataset;
use featsel_cli::extensions::select::config::read_config;
use featsel_cli::extensions::select::{select_features, write_output};
use featsel_core::prelude::*;
use std::io::BufReader;
use std::sync::Arc;

const DATASET_ARG_NAME: &str = "DATASET";
const CONFIG_ARG_NAME: &str = "config";
const METHOD_ARG_NAME: &str = "method";
const FEATURES_ARG_NAME: &str = "features";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const HAS_HEADER_ARG_NAME: &str = "has-header";

pub fn get_select_app() -> Command {
    Command::new("select")
        .about("Selects an informative subset of features from a labeled csv dataset")
        .arg(Arg::new(DATASET_ARG_NAME).help("Sets the dataset file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies selection method, overrides the one from configuration")
                .short('m')
                .long(METHOD_ARG_NAME)
                .required(false)
                .value_parser(["pso", "aco", "infoGain"]),
        )
        .arg(
            Arg::new(FEATURES_ARG_NAME)
                .help("Specifies amount of features to select")
                .short('n')
                .long(FEATURES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies a random seed to make the run repeatable")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(HAS_HEADER_ARG_NAME)
                .help("Specifies whether the first line of the dataset is a header")
                .long(HAS_HEADER_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs feature selection command.
pub fn run_select(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let dataset_path = matches.get_one::<String>(DATASET_ARG_NAME).ok_or("dataset path is not specified")?;
    let dataset = open_file(dataset_path, "dataset")
        .and_then(|file| read_csv_dataset(BufReader::new(file), matches.get_flag(HAS_HEADER_ARG_NAME)))
        .map_err(|err| format!("cannot read dataset from '{dataset_path}': '{err}'"))?;

    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    if let Some(method) = matches.get_one::<String>(METHOD_ARG_NAME) {
        config.method = Some(method.parse()?);
    }

    if let Some(num_selected) = parse_int_value(matches, FEATURES_ARG_NAME, "amount of features")? {
        config.num_selected = Some(num_selected);
    }

    if let Some(seed) = parse_int_value(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        config.seed = Some(seed);
    }

    let logger: InfoLogger = if matches.get_flag(LOG_ARG_NAME) {
        Arc::new(|msg: &str| println!("{msg}"))
    } else {
        Environment::silent_logger()
    };

    let output = select_features(Arc::new(dataset), &config, logger)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    write_output(&output, out_writer_func(out_result.transpose()?))
}
