//! Classifier
//!
//! The common interface every trained model implements, and the decision
//! tree classifier built on top of [`Tree`].
use crate::data::{Label, TrainingExample};
use crate::errors::ClassifierError;
use crate::splitter::EntropySplitter;
use crate::tree::tree::Tree;

/// A trained model mapping a feature vector to a label.
pub trait Classifier {
    /// Predict the label of a single feature vector.
    fn classify(&self, features: &[f64]) -> Result<Label, ClassifierError>;

    /// Predict the label of every row, failing on the first row that cannot be classified.
    fn classify_many(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>, ClassifierError> {
        rows.iter().map(|row| self.classify(row)).collect()
    }
}

/// Decision tree classifier, the tree is grown as soon as the classifier is created.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier {
    tree: Tree,
}

impl DecisionTreeClassifier {
    /// Train a classifier on `data`.
    ///
    /// Fails with `InvalidState` if `data` is empty or cannot be separated,
    /// and with `FeatureLengthMismatch` if the rows have different lengths.
    pub fn new(data: &[TrainingExample]) -> Result<Self, ClassifierError> {
        let tree = Tree::fit(&EntropySplitter::new(), data)?;
        Ok(DecisionTreeClassifier { tree })
    }

    /// The fitted tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl Classifier for DecisionTreeClassifier {
    /// `features` must be at least as long as the largest feature index split
    /// on along its path, a shorter vector yields `FeatureOutOfRange`.
    fn classify(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        self.tree.predict_row(features)
    }

    fn classify_many(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>, ClassifierError> {
        self.tree.predict(rows)
    }
}
