//! Import from a simple csv format: all columns are numeric, the last one is a class label.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use featsel_core::prelude::{Dataset, Float, GenericError, GenericResult};
use std::io::{BufReader, Read};

/// Reads a labeled dataset from csv. Class labels are expected to be non-negative integers.
pub fn read_csv_dataset<R: Read>(reader: BufReader<R>, has_header: bool) -> GenericResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new().has_headers(has_header).trim(csv::Trim::All).from_reader(reader);

    let rows = reader
        .records()
        .enumerate()
        .map(|(row, record)| {
            let record = record.map_err(|err| format!("cannot read row {row}: '{err}'"))?;

            record
                .iter()
                .enumerate()
                .map(|(column, value)| {
                    value.parse::<Float>().map_err(|err| {
                        GenericError::from(format!("cannot parse '{value}' at row {row}, column {column}: '{err}'"))
                    })
                })
                .collect::<GenericResult<Vec<_>>>()
        })
        .collect::<GenericResult<Vec<_>>>()?;

    Dataset::from_rows(rows)
}
