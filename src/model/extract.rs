//! Field-extraction helpers for the service's JSON payloads.
//!
//! All helpers are infallible and collapse "absent" with "present but falsy"
//! (empty string, zero): either way the typed default is returned. This
//! matches the observed service behavior, where optional fields are omitted
//! or zeroed interchangeably. The flip side is that a record legitimately
//! carrying `ttl: 0` is indistinguishable from one missing `ttl` entirely.

use serde_json::{Map, Value};

/// Non-empty string at `key`, or `""`.
pub(crate) fn string_or(values: &Map<String, Value>, key: &str) -> String {
    match values.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => String::new(),
    }
}

/// Integer at `key`, or `0`.
pub(crate) fn int_or(values: &Map<String, Value>, key: &str) -> i64 {
    values.get(key).and_then(Value::as_i64).unwrap_or(0)
}

/// Integer elements of the array at `key`, or an empty vec.
pub(crate) fn int_list_or(values: &Map<String, Value>, key: &str) -> Vec<i64> {
    match values.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_i64).collect(),
        _ => Vec::new(),
    }
}

/// String elements of the array at `key` joined with no separator, or `""`.
/// Non-string elements are skipped.
pub(crate) fn join_strings(values: &Map<String, Value>, key: &str) -> String {
    match values.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}
