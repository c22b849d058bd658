//! One Rule
//!
//! Baseline predicting from a single `feature == value` test.
use crate::classifier::Classifier;
use crate::data::{validate_feature_lengths, Label, TrainingExample};
use crate::errors::ClassifierError;
use crate::utils::{distinct_values, LabelCounts};
use log::debug;

/// A learned `features[feature] == value` test with the label on each side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    pub feature: usize,
    pub value: f64,
    /// Predicted when the test holds.
    pub matched_label: Label,
    /// Predicted otherwise.
    pub default_label: Label,
    /// Share of training rows the rule gets wrong.
    pub error_rate: f64,
}

impl Rule {
    pub fn apply(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        let v = features.get(self.feature).ok_or(ClassifierError::FeatureOutOfRange {
            index: self.feature,
            len: features.len(),
        })?;
        if *v == self.value {
            Ok(self.matched_label)
        } else {
            Ok(self.default_label)
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OneRuleClassifier {
    rule: Option<Rule>,
}

impl OneRuleClassifier {
    pub fn new() -> Self {
        OneRuleClassifier::default()
    }

    /// Pick the rule with the lowest training error, the earliest
    /// candidate wins ties. Retraining replaces the rule.
    pub fn train(&mut self, data: &[TrainingExample]) -> Result<(), ClassifierError> {
        let n_features = validate_feature_lengths(data)?;
        let mut best: Option<Rule> = None;
        for feature in 0..n_features {
            // NaN never equals itself, a rule on it would match no row.
            let values = data.iter().map(|e| e.features[feature]).filter(|v| !v.is_nan());
            for value in distinct_values(values) {
                let rule = evaluate_rule(data, feature, value);
                if best.map_or(true, |b| rule.error_rate < b.error_rate) {
                    best = Some(rule);
                }
            }
        }
        let rule = best.ok_or_else(|| {
            ClassifierError::InvalidState("no comparable feature values to build a rule from".to_string())
        })?;
        debug!(
            "Best rule: feature {} == {} -> {}, else {}, error rate {:.4}.",
            rule.feature, rule.value, rule.matched_label, rule.default_label, rule.error_rate
        );
        self.rule = Some(rule);
        Ok(())
    }

    /// The learned rule, `None` before training.
    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }
}

fn evaluate_rule(data: &[TrainingExample], feature: usize, value: f64) -> Rule {
    let mut matched = LabelCounts::new();
    let mut unmatched = LabelCounts::new();
    for example in data {
        if example.features[feature] == value {
            matched.add(example.label);
        } else {
            unmatched.add(example.label);
        }
    }
    // Candidates are observed non-NaN values, so at least one row matches.
    let matched_label = matched.majority().unwrap_or_default();
    let default_label = unmatched.majority().unwrap_or(matched_label);
    let errors = (matched.total() - matched.get(matched_label)) + (unmatched.total() - unmatched.get(default_label));
    Rule {
        feature,
        value,
        matched_label,
        default_label,
        error_rate: errors as f64 / data.len() as f64,
    }
}

impl Classifier for OneRuleClassifier {
    fn classify(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        self.rule
            .as_ref()
            .ok_or_else(|| ClassifierError::NotTrained("one rule classifier".to_string()))?
            .apply(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rule_train() {
        let data = vec![
            TrainingExample::new(vec![0., 2.], 0),
            TrainingExample::new(vec![1., 2.], 1),
            TrainingExample::new(vec![0., 3.], 0),
            TrainingExample::new(vec![1., 3.], 1),
            TrainingExample::new(vec![1., 2.], 0),
        ];
        let mut clf = OneRuleClassifier::new();
        clf.train(&data).unwrap();
        let rule = clf.rule().unwrap();
        assert_eq!(rule.feature, 0);
        assert_eq!(rule.value, 0.0);
        assert_eq!(rule.matched_label, 0);
        assert_eq!(rule.default_label, 1);
        assert_eq!(rule.error_rate, 0.2);

        assert_eq!(clf.classify(&[0., 9.]), Ok(0));
        assert_eq!(clf.classify(&[5., 9.]), Ok(1));
    }

    #[test]
    fn test_one_rule_single_value() {
        // Every row matches, the default side falls back to the matched label.
        let data = vec![
            TrainingExample::new(vec![4.], 2),
            TrainingExample::new(vec![4.], 2),
            TrainingExample::new(vec![4.], 3),
        ];
        let mut clf = OneRuleClassifier::new();
        clf.train(&data).unwrap();
        let rule = clf.rule().unwrap();
        assert_eq!(rule.matched_label, 2);
        assert_eq!(rule.default_label, 2);
        assert_eq!(clf.classify(&[1.]), Ok(2));
    }

    #[test]
    fn test_one_rule_errors() {
        let clf = OneRuleClassifier::new();
        assert!(matches!(clf.classify(&[1.]), Err(ClassifierError::NotTrained(_))));

        let mut clf = OneRuleClassifier::new();
        assert!(matches!(clf.train(&[]), Err(ClassifierError::InvalidState(_))));
        assert!(matches!(
            clf.train(&[TrainingExample::new(vec![], 1)]),
            Err(ClassifierError::InvalidState(_))
        ));

        clf.train(&[TrainingExample::new(vec![0., 1.], 1)]).unwrap();
        assert_eq!(
            clf.classify(&[]),
            Err(ClassifierError::FeatureOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_one_rule_skips_nan() {
        let data = vec![
            TrainingExample::new(vec![f64::NAN], 5),
            TrainingExample::new(vec![f64::NAN], 5),
            TrainingExample::new(vec![1.], 6),
        ];
        let mut clf = OneRuleClassifier::new();
        clf.train(&data).unwrap();
        let rule = clf.rule().unwrap();
        assert_eq!(rule.value, 1.0);
        assert_eq!(rule.matched_label, 6);
        assert_eq!(rule.default_label, 5);
        assert_eq!(rule.error_rate, 0.0);
        assert_eq!(clf.classify(&[f64::NAN]), Ok(5));

        let all_nan = vec![
            TrainingExample::new(vec![f64::NAN], 5),
            TrainingExample::new(vec![f64::NAN], 6),
        ];
        let mut clf = OneRuleClassifier::new();
        assert!(matches!(clf.train(&all_nan), Err(ClassifierError::InvalidState(_))));
        assert!(clf.rule().is_none());
    }
}
