//! Error types for card-validator.
//!
//! Validation itself never fails: schema problems are reported as findings.
//! Only an unusable configuration is an error.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when a validator configuration cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threshold {name} must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("allowed values for {field} must not be empty")]
    EmptyAllowedSet { field: &'static str },

    #[error("default difficulty {value:?} is not one of the allowed difficulties")]
    UnknownDefaultDifficulty { value: String },
}
