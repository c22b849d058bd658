use crate::data::{validate_feature_lengths, TrainingExample};
use crate::errors::ClassifierError;
use crate::node::{Node, SplitNode};
use crate::splitter::Splitter;
use crate::utils::LabelCounts;
use log::{debug, info};
use std::fmt::{self, Display};

/// A binary decision tree grown until every leaf is pure.
///
/// The tree is immutable once built, every method borrows it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    root: Node,
    n_features: usize,
    depth: usize,
    n_leaves: usize,
}

impl Tree {
    /// Grow a tree on the full training set.
    ///
    /// * `splitter` - Decides how each node is split.
    /// * `data` - Training rows, all with the same number of features.
    ///
    /// Fails with `InvalidState` when `data` is empty, or when a node with
    /// mixed labels can only be split so that one side gets every row.
    pub fn fit<T: Splitter>(splitter: &T, data: &[TrainingExample]) -> Result<Self, ClassifierError> {
        let n_features = validate_feature_lengths(data)?;
        let index: Vec<usize> = (0..data.len()).collect();
        let root = build_node(splitter, data, &index, 0)?;

        let tree = Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            root,
            n_features,
        };
        info!(
            "Built tree on {} rows, depth {}, {} leaves.",
            data.len(),
            tree.depth,
            tree.n_leaves
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of features the tree was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Length of the longest root to leaf path, in split nodes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    /// Number of split nodes using each feature.
    pub fn feature_split_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_features];
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Node::Split(split) = node {
                counts[split.split_feature] += 1;
                stack.push(&*split.left_child);
                stack.push(&*split.right_child);
            }
        }
        counts
    }
}

/// Recursively build the subtree for the rows in `index`.
fn build_node<T: Splitter>(
    splitter: &T,
    data: &[TrainingExample],
    index: &[usize],
    depth: usize,
) -> Result<Node, ClassifierError> {
    if index.is_empty() {
        return Err(ClassifierError::InvalidState("no data provided".to_string()));
    }

    let labels: LabelCounts = index.iter().map(|&i| data[i].label).collect();
    if labels.n_labels() == 1 {
        return Ok(Node::leaf(data[index[0]].label, index.len()));
    }

    let split = splitter.best_split(data, index).ok_or_else(|| {
        ClassifierError::InvalidState(format!(
            "no split candidate for {} rows with {} labels",
            index.len(),
            labels.n_labels()
        ))
    })?;

    let (left, right): (Vec<usize>, Vec<usize>) = index
        .iter()
        .copied()
        .partition(|&i| data[i].features[split.split_feature] < split.split_value);

    // Recursing here would see the same rows again.
    if left.is_empty() || right.is_empty() {
        return Err(ClassifierError::InvalidState(format!(
            "best split of {} rows with {} labels, feature {} at {}, leaves one side empty",
            index.len(),
            labels.n_labels(),
            split.split_feature,
            split.split_value
        )));
    }

    debug!(
        "Depth {}: split {} rows on feature {} < {} (score {:.4}) into {} and {}.",
        depth,
        index.len(),
        split.split_feature,
        split.split_value,
        split.split_score,
        left.len(),
        right.len()
    );

    let left_child = Box::new(build_node(splitter, data, &left, depth + 1)?);
    let right_child = Box::new(build_node(splitter, data, &right, depth + 1)?);

    Ok(Node::Split(SplitNode {
        split_feature: split.split_feature,
        split_value: split.split_value,
        split_score: split.split_score,
        n_samples: index.len(),
        left_child,
        right_child,
    }))
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(&Node, usize)> = vec![(&self.root, 0)];
        let mut r = String::new();
        while let Some((node, depth)) = print_buffer.pop() {
            r += format!("{}{}\n", "      ".repeat(depth).as_str(), node).as_str();
            if let Node::Split(split) = node {
                print_buffer.push((&*split.right_child, depth + 1));
                print_buffer.push((&*split.left_child, depth + 1));
            }
        }
        write!(f, "{}", r)
    }
}
