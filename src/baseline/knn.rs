//! K Nearest Neighbours
//!
//! Brute force neighbour search with a majority vote.
use crate::classifier::Classifier;
use crate::config::{ConfigIO, KnnConfig};
use crate::data::{validate_feature_lengths, Label, TrainingExample};
use crate::errors::ClassifierError;
use crate::utils::{items_to_strings, LabelCounts};
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Distance between two feature vectors.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub enum DistanceMetric {
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    /// Both slices must have the same length.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        let pairs = a.iter().zip(b);
        match self {
            DistanceMetric::Euclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt(),
            DistanceMetric::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum::<f64>(),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Euclidean" => Ok(DistanceMetric::Euclidean),
            "Manhattan" => Ok(DistanceMetric::Manhattan),
            _ => Err(ClassifierError::ParseString(
                s.to_string(),
                "DistanceMetric".to_string(),
                items_to_strings(vec!["Euclidean", "Manhattan"]),
            )),
        }
    }
}

/// Classifier voting among the `k` training rows closest to the query.
#[derive(Clone, Debug)]
pub struct KnnClassifier {
    data: Vec<TrainingExample>,
    n_features: usize,
    cfg: KnnConfig,
}

impl KnnClassifier {
    /// Store the training data, with the default configuration.
    pub fn new(data: &[TrainingExample]) -> Result<Self, ClassifierError> {
        Self::with_config(data, KnnConfig::default())
    }

    pub fn with_config(data: &[TrainingExample], cfg: KnnConfig) -> Result<Self, ClassifierError> {
        cfg.validate()?;
        let n_features = validate_feature_lengths(data)?;
        Ok(KnnClassifier {
            data: data.to_vec(),
            n_features,
            cfg,
        })
    }

    /// Set the number of neighbours.
    /// * `k` - Must be at least 1, checked when classifying.
    pub fn set_k(mut self, k: usize) -> Self {
        self.cfg.k = k;
        self
    }

    /// Set the distance metric.
    pub fn set_distance(mut self, distance: DistanceMetric) -> Self {
        self.cfg.distance = distance;
        self
    }

    pub fn config(&self) -> &KnnConfig {
        &self.cfg
    }

    /// The `k` closest training rows with their distances, nearest first.
    /// Rows at equal distance keep their training order.
    pub fn nearest_neighbours(&self, features: &[f64]) -> Result<Vec<(&TrainingExample, f64)>, ClassifierError> {
        self.cfg.validate()?;
        if features.len() != self.n_features {
            return Err(ClassifierError::FeatureLengthMismatch {
                expected: self.n_features,
                found: features.len(),
            });
        }
        if self.cfg.k > self.data.len() {
            warn!(
                "k is {}, but only {} training rows are available, all of them vote.",
                self.cfg.k,
                self.data.len()
            );
        }

        let mut neighbours: Vec<(&TrainingExample, f64)> = self
            .data
            .iter()
            .map(|e| (e, self.cfg.distance.distance(features, &e.features)))
            .collect();
        neighbours.sort_by(|a, b| a.1.total_cmp(&b.1));
        neighbours.truncate(self.cfg.k);
        Ok(neighbours)
    }
}

impl Classifier for KnnClassifier {
    fn classify(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        let votes: LabelCounts = self
            .nearest_neighbours(features)?
            .iter()
            .map(|(e, _)| e.label)
            .collect();
        votes
            .majority()
            .ok_or_else(|| ClassifierError::InvalidState("no neighbours to vote".to_string()))
    }
}
