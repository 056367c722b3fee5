//! A command line interface to select informative feature subsets from labeled tabular data.
//!
//! ## Usage
//!
//! - select five features using particle swarm with a repeatable seed:
//!
//!     `featsel-cli select dataset.csv --method pso --features 5 --seed 42`
//!
//! - select features using ant colony configured by json, writing result to the file:
//!
//!     `featsel-cli select dataset.csv --config config.json -o result.json --log`
//!
//! For more details, simply run
//!
//!     featsel-cli --help

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use self::commands::create_write_buffer;
use self::commands::select::{get_select_app, run_select};
use clap::Command;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("select", select_matches)) => run_select(select_matches, create_write_buffer),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Feature Subset Selection")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to filter and swarm based feature selection methods")
        .subcommand(get_select_app())
}
