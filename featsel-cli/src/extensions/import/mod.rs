//! Import datasets from various formats.

mod csv;
pub use self::csv::read_csv_dataset;
