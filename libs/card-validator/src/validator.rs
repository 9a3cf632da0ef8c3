//! Validation orchestrator.
//!
//! Runs every field rule over every card, then the cross-record checks, and
//! assembles the findings plus (in fix mode) the corrected copy.

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::cross::near_duplicates;
use crate::error::Result;
use crate::fix::FixBuilder;
use crate::matching::{Levenshtein, Similarity};
use crate::record::CardView;
use crate::rules::{check_card, RunState};
use crate::types::{ErrorKind, Location, Outcome, Report, ValidationError};

/// Validate `input` with the default configuration.
pub fn validate(input: &Value, apply_fixes: bool) -> Outcome {
    Validator::new().validate(input, apply_fixes)
}

/// A configured validator. Holds no state between runs.
pub struct Validator {
    config: ValidatorConfig,
    similarity: Box<dyn Similarity + Send + Sync>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            similarity: Box::new(Levenshtein),
        }
    }

    /// Use `config` after checking it is usable.
    pub fn with_config(config: ValidatorConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            config,
            similarity: Box::new(Levenshtein),
        })
    }

    /// Swap the similarity measure used for fuzzy matching.
    pub fn with_similarity(mut self, similarity: impl Similarity + Send + Sync + 'static) -> Self {
        self.similarity = Box::new(similarity);
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a parsed collection.
    ///
    /// Never mutates `input`. The corrected copy is `Some` only when
    /// `apply_fixes` is set and the input is an array.
    pub fn validate(&self, input: &Value, apply_fixes: bool) -> Outcome {
        let Some(cards) = input.as_array() else {
            tracing::debug!("top-level value is not an array");
            return Outcome {
                report: Report {
                    errors: vec![ValidationError::new(
                        Location::root(),
                        ErrorKind::TopLevel,
                        "Top-level JSON must be an array of card objects.",
                    )],
                    suggestions: Vec::new(),
                },
                corrected: None,
            };
        };

        let fixes = apply_fixes.then(|| FixBuilder::new(cards));
        let mut state = RunState::new(&self.config, self.similarity.as_ref(), fixes);

        for (idx, raw) in cards.iter().enumerate() {
            match CardView::from_value(idx, raw) {
                Some(card) => check_card(&card, &mut state),
                None => state.error(
                    Location::record(idx),
                    ErrorKind::NotObject,
                    "Card entry must be a JSON object.",
                ),
            }
        }

        let (mut report, fixes, categories) = state.into_parts();
        report.suggestions.extend(near_duplicates(
            &categories,
            self.config.near_duplicate_threshold,
            self.similarity.as_ref(),
        ));

        tracing::debug!(
            cards = cards.len(),
            categories = categories.len(),
            errors = report.errors.len(),
            suggestions = report.suggestions.len(),
            applied = report.applied_count(),
            "validated collection"
        );

        Outcome {
            report,
            corrected: fixes.map(FixBuilder::build),
        }
    }
}
