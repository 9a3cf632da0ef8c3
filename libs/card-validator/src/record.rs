//! Typed view over a raw card object.
//!
//! Each recognized field becomes a [`Slot`] so rules can tell a missing key
//! from an explicit `null`. Unrecognized keys are not represented here; they
//! stay in the source object and pass through to the corrected copy.

use serde_json::{Map, Value};

/// State of one recognized field in a raw card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

impl<'a> Slot<'a> {
    fn read(map: &'a Map<String, Value>, key: &str) -> Self {
        match map.get(key) {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Present(value),
        }
    }

    /// The value unless the field is absent or `null`.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// The value if it is a JSON string.
    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    /// Whether the key exists at all, `null` included.
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// One card with its recognized fields split out.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub index: usize,
    pub id: Slot<'a>,
    pub question: Slot<'a>,
    pub answer: Slot<'a>,
    pub hints: Slot<'a>,
    pub categories: Slot<'a>,
    pub difficulty: Slot<'a>,
    pub usefulness: Slot<'a>,
    pub grasped: Slot<'a>,
    pub created_at: Slot<'a>,
    pub meta: Slot<'a>,
}

impl<'a> CardView<'a> {
    /// Read a collection entry. Returns `None` if it is not a JSON object.
    pub fn from_value(index: usize, value: &'a Value) -> Option<Self> {
        value.as_object().map(|map| Self::from_object(index, map))
    }

    pub fn from_object(index: usize, map: &'a Map<String, Value>) -> Self {
        Self {
            index,
            id: Slot::read(map, "id"),
            question: Slot::read(map, "question"),
            answer: Slot::read(map, "answer"),
            hints: Slot::read(map, "hints"),
            categories: Slot::read(map, "categories"),
            difficulty: Slot::read(map, "difficulty"),
            usefulness: Slot::read(map, "usefulness"),
            grasped: Slot::read(map, "grasped"),
            created_at: Slot::read(map, "created_at"),
            meta: Slot::read(map, "meta"),
        }
    }
}
