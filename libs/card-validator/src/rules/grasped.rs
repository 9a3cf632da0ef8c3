//! `grasped` rule.

use serde_json::Value;

use super::{quoted, RunState};
use crate::normalize::normalize_boolean;
use crate::record::{CardView, Slot};
use crate::types::{ErrorKind, Location};

pub fn check_grasped(card: &CardView<'_>, state: &mut RunState<'_>) {
    let value = match card.grasped {
        Slot::Absent => return,
        Slot::Null => None,
        Slot::Present(value) => Some(value),
    };
    let loc = Location::field(card.index, "grasped");

    match value.and_then(|v| normalize_boolean(v).map(|coerced| (v, coerced))) {
        None => state.error(
            loc,
            ErrorKind::GraspedNotBool,
            "'grasped' must be a boolean (true/false).",
        ),
        Some((value, _)) if value.is_boolean() => {}
        Some((value, coerced)) => state.propose(
            loc,
            format!(
                "'grasped' looks boolean-like ({}). Consider boolean {coerced}.",
                quoted(value)
            ),
            Value::Bool(coerced),
        ),
    }
}
