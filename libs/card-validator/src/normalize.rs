//! Lexical normalizers for raw card field values.
//!
//! All functions are pure: they inspect or canonicalize a single value and
//! never look at the rest of the record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9\-._]+$").expect("valid id pattern"));
static ID_DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\-._]").expect("valid id pattern"));
static ISO8601_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:[Tt ][0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?(?:Z|[+\-][0-9]{2}:[0-9]{2})?)?$",
    )
    .expect("valid timestamp pattern")
});
static PLAIN_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})[-/]([0-9]{2})[-/]([0-9]{2})$").expect("valid date pattern")
});
static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

const TRUE_ALIASES: [&str; 3] = ["true", "yes", "1"];
const FALSE_ALIASES: [&str; 3] = ["false", "no", "0"];

/// Coerce a boolean-like value to a boolean.
///
/// Accepts native booleans, the integers `0`/`1`, and the strings
/// `true/yes/1` and `false/no/0` (trimmed, case-insensitive).
pub fn normalize_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => {
            let s = s.trim().to_lowercase();
            if TRUE_ALIASES.contains(&s.as_str()) {
                Some(true)
            } else if FALSE_ALIASES.contains(&s.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Whether [`normalize_boolean`] can coerce `value`.
pub fn is_boolean_like(value: &Value) -> bool {
    normalize_boolean(value).is_some()
}

/// Lowercase, trim, and join whitespace runs with a single hyphen.
pub fn hyphenate_category(category: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(category.trim(), "-")
        .to_lowercase()
}

/// Whether a category contains whitespace once its edges are trimmed.
pub fn has_internal_whitespace(category: &str) -> bool {
    category.trim().chars().any(char::is_whitespace)
}

/// Whether `id` matches the id pattern `[a-z0-9\-._]+`.
pub fn is_valid_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

/// Trim and lowercase `id`, replacing each disallowed character with `-`.
pub fn sanitize_id(id: &str) -> String {
    ID_DISALLOWED_RE
        .replace_all(&id.trim().to_lowercase(), "-")
        .into_owned()
}

/// Whether `s` is an ISO-8601 date or date-time naming a real calendar instant.
///
/// Accepted shapes are `YYYY-MM-DD` and `YYYY-MM-DD[T ]HH:MM:SS[.f][Z|±HH:MM]`.
pub fn is_valid_timestamp(s: &str) -> bool {
    if !ISO8601_RE.is_match(s) {
        return false;
    }
    if s.len() == 10 {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok();
    }

    // The regex pins the separator to byte 10.
    let mut normalized = format!("{}T{}", &s[..10], &s[11..]);
    if normalized.ends_with('Z') {
        normalized.pop();
        normalized.push_str("+00:00");
    }

    let has_offset = normalized.len() > 19 && normalized[19..].contains(['+', '-']);
    let nanos = if has_offset {
        DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f%:z")
            .map(|dt| dt.nanosecond())
    } else {
        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.nanosecond())
    };
    // chrono encodes a `:60` leap second as nanoseconds past one second.
    nanos.is_ok_and(|n| n < 1_000_000_000)
}

/// Reshape a plain `YYYY/MM/DD` or `YYYY-MM-DD` date into `YYYY-MM-DD`.
///
/// Returns `None` for any other shape, and for reshaped dates that still do
/// not name a real calendar day.
pub fn reshape_plain_date(s: &str) -> Option<String> {
    let caps = PLAIN_DATE_RE.captures(s.trim())?;
    let reshaped = format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
    is_valid_timestamp(&reshaped).then_some(reshaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_aliases() {
        assert_eq!(normalize_boolean(&json!(true)), Some(true));
        assert_eq!(normalize_boolean(&json!(" Yes ")), Some(true));
        assert_eq!(normalize_boolean(&json!("1")), Some(true));
        assert_eq!(normalize_boolean(&json!("NO")), Some(false));
        assert_eq!(normalize_boolean(&json!("false")), Some(false));
        assert_eq!(normalize_boolean(&json!(0)), Some(false));
        assert_eq!(normalize_boolean(&json!(1)), Some(true));
    }

    #[test]
    fn boolean_rejects_other_values() {
        assert_eq!(normalize_boolean(&json!("maybe")), None);
        assert_eq!(normalize_boolean(&json!(2)), None);
        assert_eq!(normalize_boolean(&json!(1.5)), None);
        assert_eq!(normalize_boolean(&Value::Null), None);
        assert!(!is_boolean_like(&json!(["true"])));
        assert!(is_boolean_like(&json!(false)));
    }

    #[test]
    fn hyphenate() {
        assert_eq!(hyphenate_category("Privilege  Escalation"), "privilege-escalation");
        assert_eq!(hyphenate_category("  web\tsec "), "web-sec");
        assert_eq!(hyphenate_category("sql"), "sql");
    }

    #[test]
    fn internal_whitespace() {
        assert!(has_internal_whitespace("web sec"));
        assert!(!has_internal_whitespace("  web "));
    }

    #[test]
    fn id_pattern() {
        assert!(is_valid_id("rt-0001"));
        assert!(is_valid_id("a.b_c-1"));
        assert!(!is_valid_id("RT-0001"));
        assert!(!is_valid_id("rt 1"));
        assert!(!is_valid_id(""));
    }

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_id(" RT 0001 "), "rt-0001");
        assert_eq!(sanitize_id("card#7!"), "card-7-");
        assert!(is_valid_id(&sanitize_id("Ünïcode Id")));
    }

    #[test]
    fn timestamps() {
        assert!(is_valid_timestamp("2024-02-29"));
        assert!(is_valid_timestamp("2024-01-05T10:20:30"));
        assert!(is_valid_timestamp("2024-01-05 10:20:30.123"));
        assert!(is_valid_timestamp("2024-01-05t10:20:30Z"));
        assert!(is_valid_timestamp("2024-01-05T10:20:30.5+05:30"));
        assert!(is_valid_timestamp("2024-01-05T10:20:30-08:00"));
    }

    #[test]
    fn timestamps_rejected() {
        assert!(!is_valid_timestamp("2023-02-29"));
        assert!(!is_valid_timestamp("2024-13-01"));
        assert!(!is_valid_timestamp("2024-01-05T25:00:00"));
        assert!(!is_valid_timestamp("2024-01-05T23:59:60"));
        assert!(!is_valid_timestamp("2024-01-05 23:59:60.5Z"));
        assert!(!is_valid_timestamp("2024/01/05"));
        assert!(!is_valid_timestamp("05-01-2024"));
        assert!(!is_valid_timestamp("2024-01-05T10:20"));
        assert!(!is_valid_timestamp("yesterday"));
    }

    #[test]
    fn reshape_dates() {
        assert_eq!(reshape_plain_date("2024/01/05"), Some("2024-01-05".to_string()));
        assert_eq!(reshape_plain_date(" 2024-01-05 "), Some("2024-01-05".to_string()));
        assert_eq!(reshape_plain_date("2024/13/05"), None);
        assert_eq!(reshape_plain_date("01/05/2024"), None);
        assert_eq!(reshape_plain_date("2024.01.05"), None);
    }
}
