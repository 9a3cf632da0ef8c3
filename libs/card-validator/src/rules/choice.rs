//! `difficulty` and `usefulness` rules: string fields drawn from a fixed set.
//!
//! Both use the same two-tier policy. A value that maps onto an allowed
//! entry (exactly after trimming and lowercasing, or by fuzzy match) gets a
//! suggestion carrying the canonical entry. Anything else is an error.

use serde_json::Value;

use super::RunState;
use crate::matching::fuzzy_pick;
use crate::record::{CardView, Slot};
use crate::types::{ErrorKind, Location};

struct Choice<'c> {
    field: &'static str,
    allowed: &'c [String],
    not_string: ErrorKind,
    invalid: ErrorKind,
}

pub fn check_difficulty(card: &CardView<'_>, state: &mut RunState<'_>) {
    let config = state.config;

    if card.difficulty.value().is_none() {
        let default = &config.default_difficulty;
        state.propose(
            Location::field(card.index, "difficulty"),
            format!(
                "missing 'difficulty' — recommended value: '{default}' (or {}).",
                config.difficulties.join("/")
            ),
            Value::String(default.clone()),
        );
        return;
    }

    let choice = Choice {
        field: "difficulty",
        allowed: &config.difficulties,
        not_string: ErrorKind::DifficultyNotString,
        invalid: ErrorKind::InvalidDifficulty,
    };
    check_choice(&choice, card.difficulty, card.index, state);
}

pub fn check_usefulness(card: &CardView<'_>, state: &mut RunState<'_>) {
    let config = state.config;
    let choice = Choice {
        field: "usefulness",
        allowed: &config.usefulness,
        not_string: ErrorKind::UsefulnessNotString,
        invalid: ErrorKind::InvalidUsefulness,
    };
    check_choice(&choice, card.usefulness, card.index, state);
}

fn check_choice(choice: &Choice<'_>, slot: Slot<'_>, index: usize, state: &mut RunState<'_>) {
    let Some(value) = slot.value() else {
        return;
    };
    let loc = Location::field(index, choice.field);
    let label = choice.field;

    let Some(raw) = value.as_str() else {
        state.error(
            loc,
            choice.not_string,
            format!("'{label}' must be a string: {}.", choice.allowed.join(", ")),
        );
        return;
    };

    let threshold = state.config.field_match_threshold;
    match fuzzy_pick(raw, choice.allowed, threshold, state.similarity) {
        Some(canonical) if canonical == raw => {}
        Some(canonical) => {
            let msg = if raw.trim().to_lowercase() == canonical {
                format!("{label} '{raw}' is not normalized. Suggest '{canonical}'.")
            } else {
                format!("Unknown {label} '{raw}'. Suggest '{canonical}'.")
            };
            state.propose(loc, msg, Value::String(canonical.to_string()));
        }
        None => {
            state.error(
                loc,
                choice.invalid,
                format!(
                    "Invalid {label} '{raw}'. Allowed: {}.",
                    choice.allowed.join(", ")
                ),
            );
        }
    }
}
