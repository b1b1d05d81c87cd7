//! Structured `{code, messages}` error payload reported by the service.

use serde_json::{Map, Value};

use super::extract::{int_or, string_or};

/// Structured service error, distinct from the free-text `ErrorMessage`
/// wrapper of the main response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub code: i64,
    pub message: String,
}

impl ErrorMessage {
    pub fn from_map(values: &Map<String, Value>) -> Self {
        Self {
            code: int_or(values, "code"),
            message: string_or(values, "messages"),
        }
    }

    /// Best-effort parse of a raw message body. `None` when the body is not
    /// a JSON object; fields missing from the object fall back to defaults.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        value.as_object().map(Self::from_map)
    }
}
