//! Metric
//!
//! Evaluation of trained classifiers.
use crate::classifier::Classifier;
use crate::data::{Label, TrainingExample};
use crate::errors::ClassifierError;

/// Share of predictions equal to the true label, `NaN` when there are none.
///
/// `y` and `yhat` must have the same length.
pub fn accuracy(y: &[Label], yhat: &[Label]) -> f64 {
    debug_assert_eq!(y.len(), yhat.len(), "labels and predictions differ in length");
    let correct = y.iter().zip(yhat).filter(|(a, b)| a == b).count();
    correct as f64 / y.len() as f64
}

/// Accuracy of a classifier on labeled rows.
pub fn evaluate<C: Classifier + ?Sized>(classifier: &C, data: &[TrainingExample]) -> Result<f64, ClassifierError> {
    let y: Vec<Label> = data.iter().map(|e| e.label).collect();
    let yhat = data
        .iter()
        .map(|e| classifier.classify(&e.features))
        .collect::<Result<Vec<Label>, ClassifierError>>()?;
    Ok(accuracy(&y, &yhat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::OneRuleClassifier;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[1, 0, 1, 1], &[1, 1, 1, 0]), 0.5);
        assert_eq!(accuracy(&[3], &[3]), 1.0);
        assert!(accuracy(&[], &[]).is_nan());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "labels and predictions differ in length")]
    fn test_accuracy_length_mismatch() {
        accuracy(&[1, 0, 1], &[1, 0]);
    }

    #[test]
    fn test_evaluate() {
        let data = vec![
            TrainingExample::new(vec![0.], 0),
            TrainingExample::new(vec![1.], 1),
            TrainingExample::new(vec![2.], 1),
            TrainingExample::new(vec![3.], 0),
        ];
        let mut clf = OneRuleClassifier::new();
        clf.train(&data).unwrap();
        // Rule: feature 0 == 0 -> 0, else 1.
        assert_eq!(evaluate(&clf, &data), Ok(0.75));
    }
}
