//! Splitter
//!
//! Exhaustive search for the axis aligned split that leaves the least
//! label disorder behind.
use crate::data::TrainingExample;
use crate::utils::{distinct_values, LabelCounts};

/// The outcome of a split search on a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    /// Rows with a value strictly below this go left.
    pub split_value: f64,
    pub split_score: f64,
}

// A splitter decides how the rows of a node are partitioned.
pub trait Splitter {
    /// Find the best possible split of the rows in `index`, considering every feature.
    /// Returns `None` when there are no rows, or the rows have no features.
    fn best_split(&self, data: &[TrainingExample], index: &[usize]) -> Option<SplitInfo>;
}

/// Weighted negative entropy of a two way partition.
///
/// Each side's entropy is weighted by its share of the rows and the sum is
/// negated, so a perfect split scores `0` and every other split scores below it.
pub fn split_score(left: &LabelCounts, right: &LabelCounts) -> f64 {
    let total = (left.total() + right.total()) as f64;
    if total == 0.0 {
        return 0.0;
    }
    let mut score = 0.0;
    for counts in [left, right] {
        score += counts.total() as f64 / total * counts.entropy();
    }
    -score
}

/// Splitter scoring candidates with [`split_score`]. Every distinct value a
/// feature takes on the node is tried as a threshold.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropySplitter;

impl EntropySplitter {
    pub fn new() -> Self {
        EntropySplitter
    }

    /// Score a single candidate threshold.
    pub fn evaluate_split(&self, data: &[TrainingExample], index: &[usize], feature: usize, threshold: f64) -> f64 {
        let mut left = LabelCounts::new();
        let mut right = LabelCounts::new();
        for &i in index {
            let example = &data[i];
            if example.features[feature] < threshold {
                left.add(example.label);
            } else {
                right.add(example.label);
            }
        }
        split_score(&left, &right)
    }
}

impl Splitter for EntropySplitter {
    fn best_split(&self, data: &[TrainingExample], index: &[usize]) -> Option<SplitInfo> {
        let n_features = data[*index.first()?].features.len();
        let mut best: Option<SplitInfo> = None;

        // Features in ascending order, thresholds in first-seen order.
        // Only a strictly better score replaces the current best.
        for feature in 0..n_features {
            let thresholds = distinct_values(index.iter().map(|&i| data[i].features[feature]));
            for threshold in thresholds {
                let score = self.evaluate_split(data, index, feature, threshold);
                if best.map_or(true, |b| score > b.split_score) {
                    best = Some(SplitInfo {
                        split_feature: feature,
                        split_value: threshold,
                        split_score: score,
                    });
                }
            }
        }
        best
    }
}
