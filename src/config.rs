//! Configuration
//!
//! Parameters of the baseline classifiers, loadable from JSON.
use crate::baseline::knn::DistanceMetric;
use crate::errors::ClassifierError;
use crate::utils::{validate_positive_float_parameter, validate_usize_parameter};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

fn default_k() -> usize {
    3
}
fn default_distance() -> DistanceMetric {
    DistanceMetric::Euclidean
}
fn default_alpha() -> f64 {
    1.0
}

/// Configuration for the `KnnClassifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnnConfig {
    /// Number of neighbours taking part in the vote.
    #[serde(default = "default_k")]
    pub k: usize,
    /// How distances between feature vectors are measured.
    #[serde(default = "default_distance")]
    pub distance: DistanceMetric,
}

impl Default for KnnConfig {
    fn default() -> Self {
        KnnConfig {
            k: default_k(),
            distance: default_distance(),
        }
    }
}

/// Configuration for the `NaiveBayesClassifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesConfig {
    /// Additive smoothing applied to token counts, `1.0` is Laplace smoothing.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        NaiveBayesConfig { alpha: default_alpha() }
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Check the parameters are usable.
    fn validate(&self) -> Result<(), ClassifierError>;

    /// Dump a configuration as a json object.
    fn json_dump(&self) -> Result<String, ClassifierError> {
        serde_json::to_string(self).map_err(|e| ClassifierError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string, missing fields take their defaults.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    fn from_json(json_str: &str) -> Result<Self, ClassifierError> {
        let config =
            serde_json::from_str::<Self>(json_str).map_err(|e| ClassifierError::UnableToRead(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigIO for KnnConfig {
    fn validate(&self) -> Result<(), ClassifierError> {
        validate_usize_parameter(self.k, 1, "k")
    }
}

impl ConfigIO for NaiveBayesConfig {
    fn validate(&self) -> Result<(), ClassifierError> {
        validate_positive_float_parameter(self.alpha, "alpha")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = KnnConfig::default();
        assert_eq!(config.k, 3);
        assert_eq!(config.distance, DistanceMetric::Euclidean);
        assert_eq!(NaiveBayesConfig::default().alpha, 1.0);
    }

    #[test]
    fn test_config_io_json() {
        let config = KnnConfig {
            k: 5,
            distance: DistanceMetric::Manhattan,
        };
        let json = config.json_dump().unwrap();
        let config2 = KnnConfig::from_json(&json).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_config_missing_fields() {
        let config = KnnConfig::from_json(r#"{"k": 7}"#).unwrap();
        assert_eq!(config.k, 7);
        assert_eq!(config.distance, DistanceMetric::Euclidean);

        let config = NaiveBayesConfig::from_json("{}").unwrap();
        assert_eq!(config.alpha, 1.0);
    }

    #[test]
    fn test_config_invalid() {
        assert!(matches!(
            KnnConfig::from_json(r#"{"k": 0}"#),
            Err(ClassifierError::InvalidParameter(..))
        ));
        assert!(matches!(
            NaiveBayesConfig::from_json(r#"{"alpha": -1.0}"#),
            Err(ClassifierError::InvalidParameter(..))
        ));
        assert!(matches!(
            KnnConfig::from_json(r#"{"distance": "Chebyshev"}"#),
            Err(ClassifierError::UnableToRead(_))
        ));
        assert!(matches!(
            KnnConfig::from_json("not json"),
            Err(ClassifierError::UnableToRead(_))
        ));
    }
}
