//! Baseline
//!
//! Simple classifiers to compare the decision tree against.
pub mod knn;
pub mod naive_bayes;
pub mod one_rule;

pub use knn::{DistanceMetric, KnnClassifier};
pub use naive_bayes::NaiveBayesClassifier;
pub use one_rule::{OneRuleClassifier, Rule};
