//! The productivity log entry and its create payload.
//!
//! # Responsibilities
//! - Define the stored entry shape and its composite key fields
//! - Validate the create payload's required fields
//! - Generate the write-time timestamp that serves as the sort key

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One productivity log entry. Immutable after creation.
///
/// `(user_id, timestamp)` uniquely identifies an entry: the table partitions
/// by user and sorts by timestamp within the partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Opaque identifier of the authenticated user (partition key).
    pub user_id: String,

    /// ISO-8601 UTC instant generated at write time (sort key).
    pub timestamp: String,

    /// Caller-supplied productivity level. Number or string.
    pub productivity: Value,

    /// Caller-supplied free-text feedback.
    pub feedback: Value,

    /// Caller-supplied blockers, defaulted to the empty string.
    #[serde(default)]
    pub blockers: String,
}

impl LogEntry {
    /// Build a new entry for the given user, stamping the current instant.
    pub fn create(user_id: &str, payload: NewEntry) -> Self {
        Self {
            user_id: user_id.to_string(),
            timestamp: now_iso8601(),
            productivity: payload.productivity,
            feedback: payload.feedback,
            blockers: payload.blockers.unwrap_or_default(),
        }
    }
}

/// Caller-supplied create payload. Missing fields deserialize as null so
/// validation can report them uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewEntry {
    pub productivity: Value,
    pub feedback: Value,
    pub blockers: Option<String>,
}

impl NewEntry {
    /// Both required fields must be truthy, not merely present: empty
    /// strings and zero-like values count as missing.
    pub fn has_required_fields(&self) -> bool {
        is_truthy(&self.productivity) && is_truthy(&self.feedback)
    }
}

/// Current UTC instant with microsecond precision, e.g.
/// `2026-08-24T09:15:42.123456`.
pub fn now_iso8601() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Generic emptiness check: null, `false`, `0`, `""`, `[]` and `{}` are all
/// treated as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields_accept_number_or_string() {
        let payload: NewEntry =
            serde_json::from_value(json!({"productivity": 8, "feedback": "good day"})).unwrap();
        assert!(payload.has_required_fields());

        let payload: NewEntry =
            serde_json::from_value(json!({"productivity": "high", "feedback": "good day"}))
                .unwrap();
        assert!(payload.has_required_fields());
    }

    #[test]
    fn test_missing_or_empty_fields_rejected() {
        let cases = [
            json!({"feedback": "present"}),
            json!({"productivity": 5}),
            json!({"productivity": "", "feedback": "present"}),
            json!({"productivity": 5, "feedback": ""}),
            json!({"productivity": 0, "feedback": "present"}),
            json!({"productivity": null, "feedback": null}),
            json!({}),
        ];
        for case in cases {
            let payload: NewEntry = serde_json::from_value(case.clone()).unwrap();
            assert!(!payload.has_required_fields(), "expected rejection: {case}");
        }
    }

    #[test]
    fn test_blockers_defaults_to_empty_string() {
        let payload: NewEntry =
            serde_json::from_value(json!({"productivity": 7, "feedback": "ok"})).unwrap();
        let entry = LogEntry::create("user-1", payload);
        assert_eq!(entry.blockers, "");
        assert_eq!(entry.user_id, "user-1");
    }

    #[test]
    fn test_timestamp_is_parseable_iso8601() {
        let stamp = now_iso8601();
        let parsed = chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f");
        assert!(parsed.is_ok(), "unparseable timestamp: {stamp}");
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = LogEntry {
            user_id: "user-1".to_string(),
            timestamp: "2026-08-24T09:15:42.123456".to_string(),
            productivity: json!(9),
            feedback: json!("focused"),
            blockers: "none".to_string(),
        };
        let raw = serde_json::to_value(&entry).unwrap();
        assert_eq!(raw["userId"], "user-1");
        assert_eq!(raw["productivity"], 9);
        assert_eq!(raw["blockers"], "none");
    }
}
