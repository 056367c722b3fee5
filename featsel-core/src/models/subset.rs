#[cfg(test)]
#[path = "../../tests/unit/models/subset_test.rs"]
mod subset_test;

use crate::utils::GenericResult;
use std::fmt::{Display, Formatter};

/// A set of unique feature indices kept in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureSubset {
    indices: Vec<usize>,
}

impl FeatureSubset {
    /// Creates a new instance of `FeatureSubset`, duplicates are removed.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices = indices.into_iter().collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();

        Self { indices }
    }

    /// Creates a subset from inclusion mask: feature `i` is selected iff `mask[i]` is true.
    pub fn from_mask(mask: impl IntoIterator<Item = bool>) -> Self {
        let indices = mask.into_iter().enumerate().filter(|(_, is_selected)| *is_selected).map(|(idx, _)| idx);

        Self { indices: indices.collect() }
    }

    /// Returns selected indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns amount of selected features.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no feature is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks whether feature is selected.
    pub fn contains(&self, feature: usize) -> bool {
        self.indices.binary_search(&feature).is_ok()
    }

    /// Checks that all indices are within `[0, num_features)`.
    pub fn validate(&self, num_features: usize) -> GenericResult<()> {
        match self.indices.last() {
            Some(&last) if last >= num_features => {
                Err(format!("feature index {last} is out of range [0, {num_features})").into())
            }
            _ => Ok(()),
        }
    }
}

impl FromIterator<usize> for FeatureSubset {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl From<FeatureSubset> for Vec<usize> {
    fn from(subset: FeatureSubset) -> Self {
        subset.indices
    }
}

impl Display for FeatureSubset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let values = self.indices.iter().map(|idx| idx.to_string()).collect::<Vec<_>>().join(",");

        write!(f, "[{values}]")
    }
}
