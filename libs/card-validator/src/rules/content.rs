//! Shape rules for `question`, `answer`, `hints`, and `meta`.
//!
//! None of these propose fixes: there is no safe default text.

use super::{non_blank, RunState};
use crate::record::{CardView, Slot};
use crate::types::{ErrorKind, Location};

pub fn check_question(card: &CardView<'_>, state: &mut RunState<'_>) {
    require_text(card.question, card.index, "question", ErrorKind::MissingQuestion, state);
}

pub fn check_answer(card: &CardView<'_>, state: &mut RunState<'_>) {
    require_text(card.answer, card.index, "answer", ErrorKind::MissingAnswer, state);
}

fn require_text(
    slot: Slot<'_>,
    index: usize,
    field: &'static str,
    kind: ErrorKind,
    state: &mut RunState<'_>,
) {
    if non_blank(slot.as_str()).is_none() {
        state.error(
            Location::field(index, field),
            kind,
            format!("Missing or empty '{field}'."),
        );
    }
}

pub fn check_hints(card: &CardView<'_>, state: &mut RunState<'_>) {
    let Some(hints) = card.hints.value() else {
        return;
    };
    let Some(items) = hints.as_array() else {
        state.error(
            Location::field(card.index, "hints"),
            ErrorKind::HintsNotArray,
            "'hints' must be an array of strings.",
        );
        return;
    };

    for (j, hint) in items.iter().enumerate() {
        if !hint.is_string() {
            state.error(
                Location::element(card.index, "hints", j),
                ErrorKind::HintNotString,
                "Each hint must be a string.",
            );
        }
    }
}

pub fn check_meta(card: &CardView<'_>, state: &mut RunState<'_>) {
    if let Some(meta) = card.meta.value() {
        if !meta.is_object() {
            state.error(
                Location::field(card.index, "meta"),
                ErrorKind::MetaNotObject,
                "'meta' must be an object if present.",
            );
        }
    }
}
