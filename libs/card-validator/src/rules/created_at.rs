//! `created_at` rule.
//!
//! A malformed timestamp is only ever a suggestion. The fix is limited to
//! plain dates that reshape into a real `YYYY-MM-DD` day.

use serde_json::Value;

use super::{quoted, RunState};
use crate::normalize::{is_valid_timestamp, reshape_plain_date};
use crate::record::CardView;
use crate::types::Location;

pub fn check_created_at(card: &CardView<'_>, state: &mut RunState<'_>) {
    let Some(value) = card.created_at.value() else {
        return;
    };
    if value.as_str().is_some_and(is_valid_timestamp) {
        return;
    }

    let loc = Location::field(card.index, "created_at");
    let msg = format!(
        "'created_at' looks malformed ({}). Suggest ISO8601 'YYYY-MM-DD' or full timestamp.",
        quoted(value)
    );
    match value.as_str().and_then(reshape_plain_date) {
        Some(reshaped) => state.propose(loc, msg, Value::String(reshaped)),
        None => state.advise(loc, msg),
    }
}
