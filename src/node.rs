use crate::data::Label;
use std::fmt::{self, Debug};

/// Terminal node, every row reaching it gets `label`.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafNode {
    pub label: Label,
    /// Number of training rows routed here.
    pub n_samples: usize,
}

/// Internal node, rows with `features[split_feature] < split_value`
/// go to the left child, all other rows to the right child.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitNode {
    pub split_feature: usize,
    pub split_value: f64,
    /// Weighted negative entropy of the chosen split.
    pub split_score: f64,
    pub n_samples: usize,
    pub left_child: Box<Node>,
    pub right_child: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Split(SplitNode),
}

impl Node {
    pub fn leaf(label: Label, n_samples: usize) -> Self {
        Node::Leaf(LeafNode { label, n_samples })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn n_samples(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.n_samples,
            Node::Split(split) => split.n_samples,
        }
    }

    /// Depth of the subtree rooted here, a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(split) => 1 + split.left_child.depth().max(split.right_child.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => split.left_child.n_leaves() + split.right_child.n_leaves(),
        }
    }
}

impl SplitNode {
    /// Get the child a value should travel down to.
    pub fn get_child(&self, v: f64) -> &Node {
        if v < self.split_value {
            &self.left_child
        } else {
            &self.right_child
        }
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, "leaf={},samples={}", leaf.label, leaf.n_samples),
            Node::Split(split) => write!(
                f,
                "[{} < {}] score={},samples={}",
                split.split_feature, split.split_value, split.split_score, split.n_samples
            ),
        }
    }
}
