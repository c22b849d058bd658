//! Naive Bayes
//!
//! Multinomial naive Bayes over space separated tokens.
use crate::classifier::Classifier;
use crate::config::{ConfigIO, NaiveBayesConfig};
use crate::data::{features_to_text, Label, TextExample};
use crate::errors::ClassifierError;
use crate::utils::LabelCounts;
use hashbrown::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct NaiveBayesClassifier {
    cfg: NaiveBayesConfig,
    class_counts: LabelCounts,
    token_counts: HashMap<Label, HashMap<String, usize>>,
    token_totals: HashMap<Label, usize>,
    vocabulary: HashSet<String>,
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        NaiveBayesClassifier::default()
    }

    pub fn with_config(cfg: NaiveBayesConfig) -> Result<Self, ClassifierError> {
        cfg.validate()?;
        Ok(NaiveBayesClassifier {
            cfg,
            ..Default::default()
        })
    }

    /// Set the smoothing parameter.
    /// * `alpha` - Pseudo count added to every token, must be positive.
    pub fn set_alpha(mut self, alpha: f64) -> Self {
        self.cfg.alpha = alpha;
        self
    }

    pub fn config(&self) -> &NaiveBayesConfig {
        &self.cfg
    }

    /// Count classes and tokens. Counts accumulate over repeated calls.
    pub fn train(&mut self, data: &[TextExample]) {
        for example in data {
            self.class_counts.add(example.label);
            let counts = self.token_counts.entry(example.label).or_default();
            let total = self.token_totals.entry(example.label).or_default();
            for token in example.text.split(' ') {
                *counts.entry_ref(token).or_insert(0) += 1;
                *total += 1;
                if !self.vocabulary.contains(token) {
                    self.vocabulary.insert(token.to_string());
                }
            }
        }
    }

    /// Number of distinct tokens seen in training.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Unnormalised log posterior of every class, in the order classes were first seen.
    pub fn log_probabilities(&self, text: &str) -> Result<Vec<(Label, f64)>, ClassifierError> {
        if self.class_counts.is_empty() {
            return Err(ClassifierError::NotTrained("naive Bayes classifier".to_string()));
        }
        self.cfg.validate()?;

        let alpha = self.cfg.alpha;
        let n_documents = self.class_counts.total() as f64;
        let vocabulary_size = self.vocabulary.len() as f64;
        let tokens: Vec<&str> = text.split(' ').collect();

        let probabilities = self
            .class_counts
            .iter()
            .map(|(label, count)| {
                let counts = self.token_counts.get(&label);
                let total = self.token_totals.get(&label).copied().unwrap_or(0) as f64;
                let mut log_prob = (count as f64 / n_documents).ln();
                for token in &tokens {
                    let token_count = counts.and_then(|c| c.get(*token)).copied().unwrap_or(0) as f64;
                    log_prob += ((token_count + alpha) / (total + alpha * vocabulary_size)).ln();
                }
                (label, log_prob)
            })
            .collect();
        Ok(probabilities)
    }

    /// Most probable class of a document, the first seen class wins a tie.
    pub fn classify_text(&self, text: &str) -> Result<Label, ClassifierError> {
        let mut best: Option<(Label, f64)> = None;
        for (label, log_prob) in self.log_probabilities(text)? {
            if best.map_or(true, |(_, p)| log_prob > p) {
                best = Some((label, log_prob));
            }
        }
        best.map(|(label, _)| label)
            .ok_or_else(|| ClassifierError::NotTrained("naive Bayes classifier".to_string()))
    }
}

impl Classifier for NaiveBayesClassifier {
    /// The feature values are read as a document of tokens, see [`features_to_text`].
    fn classify(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        self.classify_text(&features_to_text(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    fn spam_data() -> Vec<TextExample> {
        vec![
            TextExample::new("buy cheap pills", 1),
            TextExample::new("cheap pills now", 1),
            TextExample::new("meeting at noon", 0),
            TextExample::new("lunch at noon", 0),
        ]
    }

    #[test]
    fn test_naive_bayes_classify_text() {
        let mut clf = NaiveBayesClassifier::new();
        clf.train(&spam_data());
        assert_eq!(clf.vocabulary_size(), 8);
        assert_eq!(clf.classify_text("cheap pills"), Ok(1));
        assert_eq!(clf.classify_text("noon meeting"), Ok(0));
    }

    #[test]
    fn test_naive_bayes_log_probabilities() {
        let mut clf = NaiveBayesClassifier::new();
        clf.train(&[
            TextExample::new("a", 0),
            TextExample::new("b", 1),
            TextExample::new("b", 1),
        ]);
        let probs = clf.log_probabilities("a").unwrap();
        assert_eq!(probs.len(), 2);
        assert_eq!(probs[0].0, 0);
        assert_eq!(
            precision_round(probs[0].1, 7),
            precision_round((1.0_f64 / 3.0).ln() + (2.0_f64 / 3.0).ln(), 7)
        );
        assert_eq!(
            precision_round(probs[1].1, 7),
            precision_round((2.0_f64 / 3.0).ln() + (1.0_f64 / 4.0).ln(), 7)
        );
        assert_eq!(clf.classify_text("a"), Ok(0));
        assert_eq!(clf.classify_text("b"), Ok(1));
    }

    #[test]
    fn test_naive_bayes_features() {
        let mut clf = NaiveBayesClassifier::new();
        let data = vec![
            TextExample::from(&crate::data::TrainingExample::new(vec![1., 1.], 1)),
            TextExample::from(&crate::data::TrainingExample::new(vec![0., 0.], 0)),
        ];
        clf.train(&data);
        assert_eq!(clf.classify(&[1., 1.]), Ok(1));
        assert_eq!(clf.classify(&[0., 0.]), Ok(0));
    }

    #[test]
    fn test_naive_bayes_accumulates() {
        let mut clf = NaiveBayesClassifier::new();
        clf.train(&[TextExample::new("x", 0)]);
        assert_eq!(clf.classify_text("y"), Ok(0));
        clf.train(&[TextExample::new("y", 1), TextExample::new("y", 1)]);
        assert_eq!(clf.classify_text("y"), Ok(1));
    }

    #[test]
    fn test_naive_bayes_errors() {
        let clf = NaiveBayesClassifier::new();
        assert!(matches!(clf.classify_text("a"), Err(ClassifierError::NotTrained(_))));

        assert!(NaiveBayesClassifier::with_config(NaiveBayesConfig { alpha: 0.0 }).is_err());
        let mut clf = NaiveBayesClassifier::new().set_alpha(-2.0);
        clf.train(&spam_data());
        assert!(matches!(
            clf.classify_text("cheap"),
            Err(ClassifierError::InvalidParameter(..))
        ));
    }
}
