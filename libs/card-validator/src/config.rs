//! Validator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Minimum similarity for a field value to be corrected to an allowed value.
pub const FIELD_MATCH_THRESHOLD: f64 = 0.6;

/// Minimum similarity for two categories to be reported as near-duplicates.
///
/// Stricter than [`FIELD_MATCH_THRESHOLD`]: there is no auto-fix for this
/// finding, so false positives are only noise.
pub const NEAR_DUPLICATE_THRESHOLD: f64 = 0.85;

/// Allowed `difficulty` values, in tie-break order.
pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

/// Allowed `usefulness` values, in tie-break order.
pub const USEFULNESS: [&str; 3] = ["useful", "dangerous", "information"];

/// Settings for one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub field_match_threshold: f64,
    pub near_duplicate_threshold: f64,
    pub difficulties: Vec<String>,
    pub usefulness: Vec<String>,
    pub default_difficulty: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            field_match_threshold: FIELD_MATCH_THRESHOLD,
            near_duplicate_threshold: NEAR_DUPLICATE_THRESHOLD,
            difficulties: DIFFICULTIES.iter().map(|s| s.to_string()).collect(),
            usefulness: USEFULNESS.iter().map(|s| s.to_string()).collect(),
            default_difficulty: "medium".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Check that thresholds are ratios and the allowed sets are usable.
    pub fn check(&self) -> Result<()> {
        for (name, value) in [
            ("field_match_threshold", self.field_match_threshold),
            ("near_duplicate_threshold", self.near_duplicate_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.difficulties.is_empty() {
            return Err(ConfigError::EmptyAllowedSet {
                field: "difficulty",
            });
        }
        if self.usefulness.is_empty() {
            return Err(ConfigError::EmptyAllowedSet {
                field: "usefulness",
            });
        }
        if !self.difficulties.contains(&self.default_difficulty) {
            return Err(ConfigError::UnknownDefaultDifficulty {
                value: self.default_difficulty.clone(),
            });
        }
        Ok(())
    }
}
