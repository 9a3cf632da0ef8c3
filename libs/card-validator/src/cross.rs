//! Checks that span the whole collection.

use std::collections::HashMap;

use crate::matching::Similarity;
use crate::types::{Location, Suggestion};

/// How many occurrences of each category a near-duplicate message lists.
const OCCURRENCES_SHOWN: usize = 3;

/// Lowercased category names mapped to the cards using them, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    entries: Vec<(String, Vec<Location>)>,
    positions: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn record(&mut self, category: String, loc: Location) {
        match self.positions.get(&category) {
            Some(&pos) => self.entries[pos].1.push(loc),
            None => {
                self.positions.insert(category.clone(), self.entries.len());
                self.entries.push((category, vec![loc]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locations(&self, category: &str) -> Option<&[Location]> {
        self.positions
            .get(category)
            .map(|&pos| self.entries[pos].1.as_slice())
    }
}

/// Flag every pair of distinct categories at least `threshold` similar.
///
/// Compares all unordered pairs, so cost is quadratic in the number of
/// distinct categories. Each pair yields one advisory suggestion with no fix.
pub fn near_duplicates(
    index: &CategoryIndex,
    threshold: f64,
    similarity: &dyn Similarity,
) -> Vec<Suggestion> {
    let mut found = Vec::new();

    for (i, (a, a_locs)) in index.entries.iter().enumerate() {
        for (b, b_locs) in &index.entries[i + 1..] {
            if similarity.ratio(a, b) < threshold {
                continue;
            }
            found.push(Suggestion::advisory(
                Location::root(),
                format!(
                    "Categories '{a}' and '{b}' look similar. Consider normalizing (e.g., use '{a}' consistently). Occurrences: {} vs {}",
                    occurrences(a_locs),
                    occurrences(b_locs),
                ),
            ));
        }
    }

    found
}

fn occurrences(locs: &[Location]) -> String {
    let mut shown = locs
        .iter()
        .take(OCCURRENCES_SHOWN)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if locs.len() > OCCURRENCES_SHOWN {
        shown.push_str(", ...");
    }
    shown
}
