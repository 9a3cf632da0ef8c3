//! Validation engine for JSON flashcard collections.
//!
//! Provides:
//! - Lexical normalizers for raw field values (booleans, categories, dates, ids)
//! - Per-field validation rules with a fuzzy-correction policy
//! - Cross-record checks (duplicate ids, near-duplicate categories)
//! - A corrected copy of the collection built from approved suggestions

pub mod config;
pub mod cross;
pub mod error;
pub mod fix;
pub mod matching;
pub mod normalize;
pub mod record;
pub mod rules;
pub mod types;
pub mod validator;

pub use config::{ValidatorConfig, FIELD_MATCH_THRESHOLD, NEAR_DUPLICATE_THRESHOLD};
pub use error::{ConfigError, Result};
pub use matching::{fuzzy_pick, levenshtein_distance, Levenshtein, Similarity};
pub use types::{ErrorKind, Location, Outcome, PathSegment, Report, Suggestion, ValidationError};
pub use validator::{validate, Validator};
