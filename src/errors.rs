//! Errors
//!
//! Custom error types used throughout the `canopy` crate.
use thiserror::Error;

/// Errors that can occur while training or applying a classifier.
#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    /// The operation was asked to work on data it cannot use, such as an empty subset.
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// A split references a feature the provided vector does not have.
    #[error("Feature index {index} is out of range for a feature vector of length {len}.")]
    FeatureOutOfRange { index: usize, len: usize },
    /// Feature vectors of different lengths were mixed.
    #[error("Expected a feature vector of length {expected}, but found one of length {found}.")]
    FeatureLengthMismatch { expected: usize, found: usize },
    /// Classification was requested before training.
    #[error("The {0} has not been trained.")]
    NotTrained(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to serialize a configuration.
    #[error("Unable to write configuration: {0}")]
    UnableToWrite(String),
    /// Unable to read a configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
}
