//! `id` rule: presence, pattern, and uniqueness.

use serde_json::Value;

use super::{non_blank, RunState};
use crate::normalize::{is_valid_id, sanitize_id};
use crate::record::CardView;
use crate::types::{ErrorKind, Location};

pub fn check_id(card: &CardView<'_>, state: &mut RunState<'_>) {
    let loc = Location::field(card.index, "id");

    let Some(id) = non_blank(card.id.as_str()) else {
        state.error(
            loc,
            ErrorKind::MissingId,
            "Missing or empty 'id' (recommended pattern: rt-0001).",
        );
        return;
    };

    if !is_valid_id(id) {
        let suggested = sanitize_id(id);
        state.propose(
            loc.clone(),
            format!("id contains disallowed chars. Suggested id: '{suggested}'"),
            Value::String(suggested),
        );
    }

    // Uniqueness is judged on the raw id, before any sanitizing.
    match state.seen_ids.get(id) {
        Some(first) => {
            let msg = format!("Duplicate id '{id}' also at {first}");
            state.error(loc, ErrorKind::DuplicateId, msg);
        }
        None => {
            state
                .seen_ids
                .insert(id.to_string(), Location::record(card.index));
        }
    }
}
