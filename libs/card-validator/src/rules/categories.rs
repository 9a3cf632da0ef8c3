//! `categories` rule.
//!
//! Categories with whitespace inside get a hyphenation suggestion even
//! outside fix mode. Categories without it are trimmed and lowercased in the
//! corrected copy silently. Blank categories are flagged and left alone.
//! Every other string category feeds the collection-wide index used for
//! near-duplicate detection.

use serde_json::Value;

use super::RunState;
use crate::normalize::{has_internal_whitespace, hyphenate_category};
use crate::record::CardView;
use crate::types::{ErrorKind, Location};

pub fn check_categories(card: &CardView<'_>, state: &mut RunState<'_>) {
    let Some(categories) = card.categories.value() else {
        return;
    };
    let Some(items) = categories.as_array() else {
        state.error(
            Location::field(card.index, "categories"),
            ErrorKind::CategoriesNotArray,
            "'categories' must be an array of strings.",
        );
        return;
    };

    for (j, item) in items.iter().enumerate() {
        let loc = Location::element(card.index, "categories", j);
        let Some(category) = item.as_str() else {
            state.error(loc, ErrorKind::CategoryNotString, "Each category must be a string.");
            continue;
        };

        if category.trim().is_empty() {
            state.advise(loc, "Category is blank; consider removing it.");
            continue;
        }

        if has_internal_whitespace(category) {
            let hyphenated = hyphenate_category(category);
            state.propose(
                loc,
                format!(
                    "Category '{category}' contains spaces; consider hyphenation (e.g. '{hyphenated}')."
                ),
                Value::String(hyphenated),
            );
        } else {
            let normalized = category.trim().to_lowercase();
            if normalized != category {
                state.normalize(&loc, Value::String(normalized));
            }
        }

        state
            .categories
            .record(category.trim().to_lowercase(), Location::record(card.index));
    }
}
