//! Findings produced by a validation run.

use std::fmt;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step of a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Index of a card in the collection.
    Record(usize),
    /// Name of a field within a card.
    Field(&'static str),
    /// Index of an element within an array field.
    Element(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(idx) => write!(f, "cards[{idx}]"),
            Self::Field(name) => f.write_str(name),
            Self::Element(idx) => write!(f, "{idx}"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Element(idx) => serializer.serialize_u64(*idx as u64),
            other => serializer.collect_str(other),
        }
    }
}

/// Where a finding applies. An empty path addresses the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Location(Vec<PathSegment>);

impl Location {
    /// The collection-level location.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn record(idx: usize) -> Self {
        Self(vec![PathSegment::Record(idx)])
    }

    pub fn field(idx: usize, field: &'static str) -> Self {
        Self(vec![PathSegment::Record(idx), PathSegment::Field(field)])
    }

    pub fn element(idx: usize, field: &'static str, element: usize) -> Self {
        Self(vec![
            PathSegment::Record(idx),
            PathSegment::Field(field),
            PathSegment::Element(element),
        ])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the segments with `" > "`, or return `placeholder` for the root.
    pub fn render(&self, placeholder: &str) -> String {
        if self.is_root() {
            return placeholder.to_string();
        }
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("<root>"))
    }
}

/// Kind of a blocking schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TopLevel,
    NotObject,
    MissingId,
    DuplicateId,
    MissingQuestion,
    MissingAnswer,
    HintsNotArray,
    HintNotString,
    CategoriesNotArray,
    CategoryNotString,
    DifficultyNotString,
    InvalidDifficulty,
    GraspedNotBool,
    UsefulnessNotString,
    InvalidUsefulness,
    MetaNotObject,
}

impl ErrorKind {
    /// The report identifier, e.g. `missing_id`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLevel => "top_level",
            Self::NotObject => "not_object",
            Self::MissingId => "missing_id",
            Self::DuplicateId => "duplicate_id",
            Self::MissingQuestion => "missing_question",
            Self::MissingAnswer => "missing_answer",
            Self::HintsNotArray => "hints_not_array",
            Self::HintNotString => "hint_not_string",
            Self::CategoriesNotArray => "categories_not_array",
            Self::CategoryNotString => "category_not_string",
            Self::DifficultyNotString => "difficulty_not_string",
            Self::InvalidDifficulty => "invalid_difficulty",
            Self::GraspedNotBool => "grasped_not_bool",
            Self::UsefulnessNotString => "usefulness_not_string",
            Self::InvalidUsefulness => "invalid_usefulness",
            Self::MetaNotObject => "meta_not_object",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema violation with no safe automatic remediation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub loc: Location,
    #[serde(rename = "err")]
    pub kind: ErrorKind,
    pub msg: String,
}

impl ValidationError {
    pub fn new(loc: Location, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc,
            kind,
            msg: msg.into(),
        }
    }
}

/// An advisory finding, optionally carrying a replacement value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub loc: Location,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Value>,
    pub applied: bool,
}

impl Suggestion {
    /// A suggestion with nothing to apply.
    pub fn advisory(loc: Location, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            replacement: None,
            applied: false,
        }
    }

    /// A suggestion proposing `replacement` for the value at `loc`.
    pub fn with_fix(loc: Location, msg: impl Into<String>, replacement: Value) -> Self {
        Self {
            loc,
            msg: msg.into(),
            replacement: Some(replacement),
            applied: false,
        }
    }
}

/// Machine-readable report of every finding in a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub errors: Vec<ValidationError>,
    pub suggestions: Vec<Suggestion>,
}

impl Report {
    /// Success depends on errors only; suggestions never block.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.suggestions.is_empty()
    }

    pub fn applied_count(&self) -> usize {
        self.suggestions.iter().filter(|s| s.applied).count()
    }
}

/// Result of validating a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub report: Report,
    /// Corrected copy of the input, produced only in fix mode.
    pub corrected: Option<Value>,
}

impl Outcome {
    pub fn errors(&self) -> &[ValidationError] {
        &self.report.errors
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.report.suggestions
    }

    pub fn is_success(&self) -> bool {
        self.report.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_location() {
        assert_eq!(Location::root().render("<global>"), "<global>");
        assert_eq!(Location::record(3).render("<root>"), "cards[3]");
        assert_eq!(
            Location::element(0, "hints", 2).render("<root>"),
            "cards[0] > hints > 2"
        );
    }

    #[test]
    fn serialize_location_segments() {
        let value = serde_json::to_value(Location::element(1, "categories", 4)).unwrap();
        assert_eq!(value, json!(["cards[1]", "categories", 4]));
    }

    #[test]
    fn serialize_error_uses_err_key() {
        let error = ValidationError::new(Location::field(0, "id"), ErrorKind::MissingId, "missing");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(
            value,
            json!({"loc": ["cards[0]", "id"], "err": "missing_id", "msg": "missing"})
        );
    }

    #[test]
    fn serialize_empty_report() {
        let value = serde_json::to_value(Report::default()).unwrap();
        assert_eq!(value, json!({"errors": [], "suggestions": []}));
    }

    #[test]
    fn kind_strings_match_serde() {
        for kind in [ErrorKind::TopLevel, ErrorKind::InvalidUsefulness, ErrorKind::HintNotString] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn suggestions_do_not_block_success() {
        let report = Report {
            errors: vec![],
            suggestions: vec![Suggestion::advisory(Location::root(), "similar")],
        };
        assert!(report.is_success());
        assert!(!report.is_clean());
    }
}
