use super::tree::Tree;
use crate::data::Label;
use crate::errors::ClassifierError;
use crate::node::{LeafNode, Node};

/// One comparison made while walking the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub split_feature: usize,
    pub split_value: f64,
    /// Whether the value was below `split_value`.
    pub went_left: bool,
}

#[inline]
fn feature_value(row: &[f64], feature: usize) -> Result<f64, ClassifierError> {
    row.get(feature).copied().ok_or(ClassifierError::FeatureOutOfRange {
        index: feature,
        len: row.len(),
    })
}

impl Tree {
    /// Find the leaf a row ends up in.
    ///
    /// `row` must contain every feature a split on its path refers to,
    /// otherwise `FeatureOutOfRange` is returned.
    pub fn predict_leaf(&self, row: &[f64]) -> Result<&LeafNode, ClassifierError> {
        let mut node = self.root();
        loop {
            match node {
                Node::Leaf(leaf) => return Ok(leaf),
                Node::Split(split) => node = split.get_child(feature_value(row, split.split_feature)?),
            }
        }
    }

    /// Predict the label of a single row.
    pub fn predict_row(&self, row: &[f64]) -> Result<Label, ClassifierError> {
        self.predict_leaf(row).map(|leaf| leaf.label)
    }

    /// Predict the label of every row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>, ClassifierError> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    /// The comparisons made on the way from the root to the leaf of `row`.
    /// Never longer than the depth of the tree.
    pub fn decision_path(&self, row: &[f64]) -> Result<Vec<Decision>, ClassifierError> {
        let mut path = Vec::new();
        let mut node = self.root();
        while let Node::Split(split) = node {
            let v = feature_value(row, split.split_feature)?;
            path.push(Decision {
                split_feature: split.split_feature,
                split_value: split.split_value,
                went_left: v < split.split_value,
            });
            node = split.get_child(v);
        }
        Ok(path)
    }
}
