//! Data
//!
//! Containers for labeled training data.
use crate::errors::ClassifierError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Class label predicted by every classifier in the crate.
pub type Label = i64;

/// A single labeled row of numeric features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Feature values, all rows of one dataset share the same length.
    pub features: Vec<f64>,
    /// Class of the row.
    pub label: Label,
}

impl TrainingExample {
    pub fn new(features: Vec<f64>, label: Label) -> Self {
        TrainingExample { features, label }
    }
}

/// A labeled document, made of space separated tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextExample {
    pub text: String,
    pub label: Label,
}

impl TextExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        TextExample {
            text: text.into(),
            label,
        }
    }
}

impl From<&TrainingExample> for TextExample {
    /// Render the feature values as a document, `[0.0, 1.5]` becomes `"0 1.5"`.
    fn from(example: &TrainingExample) -> Self {
        TextExample {
            text: features_to_text(&example.features),
            label: example.label,
        }
    }
}

impl Display for TrainingExample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] -> {}", features_to_text(&self.features), self.label)
    }
}

/// Join feature values with single spaces.
pub fn features_to_text(features: &[f64]) -> String {
    features.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

/// Check that the data is not empty and that every row has the
/// same number of features, returning that number.
pub fn validate_feature_lengths(data: &[TrainingExample]) -> Result<usize, ClassifierError> {
    let first = data
        .first()
        .ok_or_else(|| ClassifierError::InvalidState("no data provided".to_string()))?;
    let expected = first.features.len();
    match data.iter().find(|e| e.features.len() != expected) {
        Some(e) => Err(ClassifierError::FeatureLengthMismatch {
            expected,
            found: e.features.len(),
        }),
        None => Ok(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_from_example() {
        let example = TrainingExample::new(vec![0.0, 1.0, 2.5, -3.0], 4);
        let text = TextExample::from(&example);
        assert_eq!(text.text, "0 1 2.5 -3");
        assert_eq!(text.label, 4);
    }

    #[test]
    fn test_display_example() {
        let example = TrainingExample::new(vec![1.0, 0.0], 1);
        assert_eq!(example.to_string(), "[1 0] -> 1");
    }

    #[test]
    fn test_validate_feature_lengths() {
        let data = vec![
            TrainingExample::new(vec![0.0, 1.0], 0),
            TrainingExample::new(vec![1.0, 1.0], 1),
        ];
        assert_eq!(validate_feature_lengths(&data), Ok(2));

        let ragged = vec![
            TrainingExample::new(vec![0.0, 1.0], 0),
            TrainingExample::new(vec![1.0], 1),
        ];
        assert_eq!(
            validate_feature_lengths(&ragged),
            Err(ClassifierError::FeatureLengthMismatch { expected: 2, found: 1 })
        );

        assert!(matches!(
            validate_feature_lengths(&[]),
            Err(ClassifierError::InvalidState(_))
        ));
    }
}
