//! Helpers for encoding/decoding session cookie values.
//!
//! This is primarily useful for testing and debugging.
//!
//! Note: the on-wire format is intentionally plain. A value that parses as JSON travels as
//! its compact JSON encoding; anything else travels as the raw string.

use serde_json::Value;

/// Decode a raw cookie string into a session value.
///
/// Attempts a JSON parse first; a string that is not valid JSON is kept verbatim as
/// [`Value::String`]. Malformed client-supplied cookies therefore never fail the request.
pub fn decode_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Encode a session value into the cookie string.
///
/// Strings pass through unchanged; every other value is serialized to compact JSON.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Values the store treats as "no value supplied" on write: `null`, `false`, `0`, `""`.
/// Arrays and objects always count as values, even when empty.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
