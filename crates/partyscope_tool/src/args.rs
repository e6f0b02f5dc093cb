//! Argument extraction from the caller's JSON object.
//!
//! Decoding is forgiving exactly where the validator specifies it (limits
//! coerce, scopes lowercase) and strict otherwise (a missing required field
//! is a validation failure).

use partyscope_core::{ToolError, ToolResult};
use serde_json::Value;

/// Required integer argument. Accepts a JSON number or a numeric string.
///
/// # Errors
///
/// Returns a validation error when the key is absent or not an integer.
pub fn required_integer(args: &Value, key: &str) -> ToolResult<i64> {
    match args.get(key) {
        Some(value) => lenient_integer(value)
            .ok_or_else(|| ToolError::validation(format!("{key} must be an integer"))),
        None => Err(ToolError::validation(format!("{key} is required"))),
    }
}

/// Optional string argument. `null` and absence read the same.
pub fn optional_string(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Optional integer argument; non-numeric values read as absent so the
/// validator's default applies.
pub fn optional_integer(args: &Value, key: &str) -> Option<i64> {
    args.get(key).and_then(lenient_integer)
}

/// Boolean flag; anything other than `true` reads as false.
pub fn flag(args: &Value, key: &str) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
