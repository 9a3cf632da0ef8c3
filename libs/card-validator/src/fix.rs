//! Builder for the corrected copy of a collection.
//!
//! The builder starts as a deep clone of the input and only ever receives
//! indexed patches, so the input itself is never touched.

use serde_json::Value;

use crate::types::{Location, PathSegment};

#[derive(Debug, Clone)]
pub struct FixBuilder {
    cards: Vec<Value>,
}

impl FixBuilder {
    pub fn new(cards: &[Value]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Overwrite (or insert) `field` on the card at `index`.
    pub fn set_field(&mut self, index: usize, field: &str, value: Value) {
        if let Some(card) = self.cards.get_mut(index).and_then(Value::as_object_mut) {
            card.insert(field.to_string(), value);
        }
    }

    /// Overwrite one element of an array `field` on the card at `index`.
    ///
    /// Out-of-range elements and non-array fields are left alone.
    pub fn set_element(&mut self, index: usize, field: &str, element: usize, value: Value) {
        let slot = self
            .cards
            .get_mut(index)
            .and_then(|card| card.get_mut(field))
            .and_then(Value::as_array_mut)
            .and_then(|items| items.get_mut(element));
        if let Some(slot) = slot {
            *slot = value;
        }
    }

    /// Write `value` at a field or element location.
    ///
    /// Root and record-level locations carry no patchable value and are ignored.
    pub fn apply(&mut self, loc: &Location, value: Value) {
        match loc.segments() {
            [PathSegment::Record(index), PathSegment::Field(field)] => {
                self.set_field(*index, field, value)
            }
            [PathSegment::Record(index), PathSegment::Field(field), PathSegment::Element(element)] => {
                self.set_element(*index, field, *element, value)
            }
            _ => {}
        }
    }

    pub fn build(self) -> Value {
        Value::Array(self.cards)
    }
}
