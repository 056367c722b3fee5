#[cfg(test)]
#[path = "../../tests/unit/models/dataset_test.rs"]
mod dataset_test;

use crate::utils::{Float, GenericResult};

/// A single labeled sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Feature values, one per original feature.
    pub features: Vec<Float>,
    /// A class index in `[0, num_classes)`.
    pub label: usize,
}

/// A labeled tabular dataset: every sample has the same amount of features and a valid class label.
#[derive(Clone, Debug)]
pub struct Dataset {
    samples: Vec<Sample>,
    num_features: usize,
    num_classes: usize,
}

impl Dataset {
    /// Creates a new instance of `Dataset` from samples with known amount of classes.
    pub fn new(samples: Vec<Sample>, num_classes: usize) -> GenericResult<Self> {
        let num_features = samples.first().map(|sample| sample.features.len()).ok_or("dataset has no samples")?;

        if num_features == 0 {
            return Err("dataset has no features".into());
        }

        if num_classes == 0 {
            return Err("amount of classes should be positive".into());
        }

        if num_classes > samples.len() {
            return Err(format!("amount of classes {num_classes} exceeds amount of samples {}", samples.len()).into());
        }

        if let Some((idx, sample)) = samples.iter().enumerate().find(|(_, s)| s.features.len() != num_features) {
            return Err(format!(
                "sample {idx} has {} features, but {num_features} are expected",
                sample.features.len()
            )
            .into());
        }

        if let Some((idx, sample)) = samples.iter().enumerate().find(|(_, s)| s.label >= num_classes) {
            return Err(format!("sample {idx} has label {} out of range [0, {num_classes})", sample.label).into());
        }

        Ok(Self { samples, num_features, num_classes })
    }

    /// Creates a new instance of `Dataset` from raw rows where the last element of each row is a class label.
    /// Amount of classes is derived from the greatest label.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let samples = rows
            .into_iter()
            .enumerate()
            .map(|(idx, mut row)| {
                let label = row.pop().ok_or_else(|| format!("row {idx} is empty"))?;
                let label = parse_label(label).ok_or_else(|| format!("row {idx} has invalid label: {label}"))?;

                Ok(Sample { features: row, label })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        let num_classes = samples.iter().map(|sample| sample.label + 1).max().unwrap_or(0);

        Self::new(samples, num_classes)
    }

    /// Returns all samples.
    pub fn samples(&self) -> &[Sample] {
        self.samples.as_slice()
    }

    /// Returns a sample at given index.
    pub fn sample(&self, idx: usize) -> &Sample {
        &self.samples[idx]
    }

    /// Returns amount of samples.
    pub fn size(&self) -> usize {
        self.samples.len()
    }

    /// Returns amount of original features.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Returns amount of classes.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Returns amount of samples per class for given sample indices.
    pub fn class_counts(&self, rows: &[usize]) -> Vec<usize> {
        rows.iter().fold(vec![0; self.num_classes], |mut counts, &row| {
            counts[self.samples[row].label] += 1;
            counts
        })
    }
}

fn parse_label(value: Float) -> Option<usize> {
    if value.is_finite() && value >= 0. && value.fract() == 0. && value <= u32::MAX as Float {
        Some(value as usize)
    } else {
        None
    }
}
