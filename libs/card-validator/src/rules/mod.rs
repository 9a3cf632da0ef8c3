//! Per-field validation rules.
//!
//! Every rule looks at one field of a [`CardView`] and reports into a shared
//! [`RunState`]. Rules run in a fixed order; see [`check_card`].

pub mod categories;
pub mod choice;
pub mod content;
pub mod created_at;
pub mod grasped;
pub mod identity;

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::cross::CategoryIndex;
use crate::fix::FixBuilder;
use crate::matching::Similarity;
use crate::record::CardView;
use crate::types::{ErrorKind, Location, Report, Suggestion, ValidationError};

/// Everything accumulated during one validation run.
pub struct RunState<'r> {
    pub config: &'r ValidatorConfig,
    pub similarity: &'r dyn Similarity,
    pub errors: Vec<ValidationError>,
    pub suggestions: Vec<Suggestion>,
    /// Present only in fix mode.
    pub fixes: Option<FixBuilder>,
    /// Raw id to the location of the card that used it first.
    pub seen_ids: HashMap<String, Location>,
    pub categories: CategoryIndex,
}

impl<'r> RunState<'r> {
    pub fn new(
        config: &'r ValidatorConfig,
        similarity: &'r dyn Similarity,
        fixes: Option<FixBuilder>,
    ) -> Self {
        Self {
            config,
            similarity,
            errors: Vec::new(),
            suggestions: Vec::new(),
            fixes,
            seen_ids: HashMap::new(),
            categories: CategoryIndex::default(),
        }
    }

    pub fn error(&mut self, loc: Location, kind: ErrorKind, msg: impl Into<String>) {
        self.errors.push(ValidationError::new(loc, kind, msg));
    }

    pub fn advise(&mut self, loc: Location, msg: impl Into<String>) {
        self.suggestions.push(Suggestion::advisory(loc, msg));
    }

    /// Suggest `replacement` for `loc`, writing it to the corrected copy in fix mode.
    pub fn propose(&mut self, loc: Location, msg: impl Into<String>, replacement: Value) {
        let mut suggestion = Suggestion::with_fix(loc, msg, replacement.clone());
        if let Some(fixes) = self.fixes.as_mut() {
            fixes.apply(&suggestion.loc, replacement);
            suggestion.applied = true;
        }
        self.suggestions.push(suggestion);
    }

    /// Write an unambiguous normalization to the corrected copy without a finding.
    pub fn normalize(&mut self, loc: &Location, value: Value) {
        if let Some(fixes) = self.fixes.as_mut() {
            fixes.apply(loc, value);
        }
    }

    pub fn into_parts(self) -> (Report, Option<FixBuilder>, CategoryIndex) {
        let report = Report {
            errors: self.errors,
            suggestions: self.suggestions,
        };
        (report, self.fixes, self.categories)
    }
}

/// Run every field rule against one card.
pub fn check_card(card: &CardView<'_>, state: &mut RunState<'_>) {
    identity::check_id(card, state);
    content::check_question(card, state);
    content::check_answer(card, state);
    content::check_hints(card, state);
    categories::check_categories(card, state);
    choice::check_difficulty(card, state);
    grasped::check_grasped(card, state);
    choice::check_usefulness(card, state);
    created_at::check_created_at(card, state);
    content::check_meta(card, state);
}

/// Whether `value` is a string with something other than whitespace in it.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// A value as quoted in messages: strings in single quotes, anything else as JSON.
pub(crate) fn quoted(value: &Value) -> String {
    match value.as_str() {
        Some(s) => format!("'{s}'"),
        None => value.to_string(),
    }
}
