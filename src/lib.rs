mod node;

// Modules
pub mod baseline;
pub mod classifier;
pub mod config;
pub mod data;
pub mod errors;
pub mod metric;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use baseline::{KnnClassifier, NaiveBayesClassifier, OneRuleClassifier};
pub use classifier::{Classifier, DecisionTreeClassifier};
pub use data::{Label, TextExample, TrainingExample};
pub use errors::ClassifierError;
pub use node::{LeafNode, Node, SplitNode};
pub use tree::tree::Tree;
