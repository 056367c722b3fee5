#[cfg(test)]
#[path = "../../tests/unit/evaluation/classifier_test.rs"]
mod classifier_test;

use crate::models::{Dataset, FeatureSubset, Sample};
use crate::utils::{Float, GenericResult, compare_floats};

/// A classifier which can be trained on a part of a dataset restricted to a feature subset.
pub trait Classifier: Send + Sync {
    /// Trains a model using samples at `rows` and only the features from `subset`.
    fn train(&self, dataset: &Dataset, rows: &[usize], subset: &FeatureSubset) -> GenericResult<Box<dyn Model>>;
}

/// A trained model.
pub trait Model: Send + Sync {
    /// Predicts a class label of the sample.
    fn predict(&self, sample: &Sample) -> usize;
}

/// A k-nearest neighbours classifier with euclidean distance.
pub struct KNearestNeighbors {
    k: usize,
}

impl KNearestNeighbors {
    /// Creates a new instance of `KNearestNeighbors`.
    pub fn new(k: usize) -> GenericResult<Self> {
        if k == 0 {
            return Err("amount of neighbours should be positive".into());
        }

        Ok(Self { k })
    }
}

impl Classifier for KNearestNeighbors {
    fn train(&self, dataset: &Dataset, rows: &[usize], subset: &FeatureSubset) -> GenericResult<Box<dyn Model>> {
        validate_training_input(dataset, rows, subset)?;

        let features = subset.indices().to_vec();
        let points = rows
            .iter()
            .map(|&row| {
                let sample = dataset.sample(row);
                (features.iter().map(|&feature| sample.features[feature]).collect::<Vec<_>>(), sample.label)
            })
            .collect();

        Ok(Box::new(NearestNeighborsModel { k: self.k, num_classes: dataset.num_classes(), features, points }))
    }
}

struct NearestNeighborsModel {
    k: usize,
    num_classes: usize,
    features: Vec<usize>,
    points: Vec<(Vec<Float>, usize)>,
}

impl Model for NearestNeighborsModel {
    fn predict(&self, sample: &Sample) -> usize {
        let mut neighbours = self
            .points
            .iter()
            .map(|(point, label)| {
                let distance = self
                    .features
                    .iter()
                    .zip(point.iter())
                    .map(|(&feature, value)| (sample.features[feature] - value).powi(2))
                    .sum::<Float>();

                (distance, *label)
            })
            .collect::<Vec<_>>();

        let k = self.k.min(neighbours.len());
        neighbours.sort_by(|(a, _), (b, _)| compare_floats(*a, *b));
        neighbours.truncate(k);

        let votes = neighbours.iter().fold(vec![0_usize; self.num_classes], |mut votes, (_, label)| {
            votes[*label] += 1;
            votes
        });
        let max_votes = votes.iter().copied().max().unwrap_or(0);

        // on tie, the class of the nearest neighbour among tied classes wins
        neighbours.iter().map(|(_, label)| *label).find(|label| votes[*label] == max_votes).unwrap_or(0)
    }
}

/// A gaussian naive bayes classifier.
#[derive(Default)]
pub struct GaussianNaiveBayes {}

const VARIANCE_SMOOTHING: Float = 1E-9;

impl Classifier for GaussianNaiveBayes {
    fn train(&self, dataset: &Dataset, rows: &[usize], subset: &FeatureSubset) -> GenericResult<Box<dyn Model>> {
        validate_training_input(dataset, rows, subset)?;

        let features = subset.indices().to_vec();
        let counts = dataset.class_counts(rows);

        let mut means = vec![vec![0.; features.len()]; dataset.num_classes()];
        rows.iter().map(|&row| dataset.sample(row)).for_each(|sample| {
            features.iter().enumerate().for_each(|(idx, &feature)| means[sample.label][idx] += sample.features[feature])
        });
        means.iter_mut().zip(counts.iter()).filter(|(_, count)| **count > 0).for_each(|(means, &count)| {
            means.iter_mut().for_each(|mean| *mean /= count as Float);
        });

        let mut variances = vec![vec![0.; features.len()]; dataset.num_classes()];
        rows.iter().map(|&row| dataset.sample(row)).for_each(|sample| {
            features.iter().enumerate().for_each(|(idx, &feature)| {
                variances[sample.label][idx] += (sample.features[feature] - means[sample.label][idx]).powi(2)
            })
        });

        let max_variance = variances
            .iter()
            .zip(counts.iter())
            .filter(|(_, count)| **count > 0)
            .flat_map(|(variances, &count)| variances.iter().map(move |variance| variance / count as Float))
            .fold(0., Float::max);
        let epsilon = VARIANCE_SMOOTHING * max_variance.max(1.);

        variances.iter_mut().zip(counts.iter()).for_each(|(variances, &count)| {
            variances.iter_mut().for_each(|variance| *variance = *variance / count.max(1) as Float + epsilon);
        });

        let total = rows.len() as Float;
        let classes = counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(label, &count)| ClassDistribution {
                label,
                log_prior: (count as Float / total).ln(),
                means: means[label].clone(),
                variances: variances[label].clone(),
            })
            .collect();

        Ok(Box::new(NaiveBayesModel { features, classes }))
    }
}

struct ClassDistribution {
    label: usize,
    log_prior: Float,
    means: Vec<Float>,
    variances: Vec<Float>,
}

struct NaiveBayesModel {
    features: Vec<usize>,
    classes: Vec<ClassDistribution>,
}

impl Model for NaiveBayesModel {
    fn predict(&self, sample: &Sample) -> usize {
        let log_likelihood = |class: &ClassDistribution| {
            class.log_prior
                + self
                    .features
                    .iter()
                    .zip(class.means.iter().zip(class.variances.iter()))
                    .map(|(&feature, (mean, variance))| {
                        let diff = sample.features[feature] - mean;
                        -0.5 * ((2. * std::f64::consts::PI * variance).ln() + diff * diff / variance)
                    })
                    .sum::<Float>()
        };

        self.classes
            .iter()
            .map(|class| (log_likelihood(class), class.label))
            // max_by returns the last maximum, so reverse to prefer a lower label on tie
            .rev()
            .max_by(|(a, _), (b, _)| compare_floats(*a, *b))
            .map_or(0, |(_, label)| label)
    }
}

fn validate_training_input(dataset: &Dataset, rows: &[usize], subset: &FeatureSubset) -> GenericResult<()> {
    if rows.is_empty() {
        return Err("cannot train a classifier without samples".into());
    }

    if subset.is_empty() {
        return Err("cannot train a classifier without features".into());
    }

    subset.validate(dataset.num_features())
}
