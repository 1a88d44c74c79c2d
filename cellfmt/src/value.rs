//! Conversions from raw cell values to text and numbers.
//!
//! Cells arrive as [`serde_json::Value`] so that strings, numbers, booleans
//! and missing values all go through the same entry points. Every transform
//! reads its input through the helpers here, which keeps the conversion
//! rules (what counts as numeric, how numbers print) in one place.

use serde_json::{Map, Value};

use crate::error::CellfmtError;
use crate::Result;

/// Named options passed alongside a value (`decimal_places`, `yes_icon`, ...).
pub type Options = Map<String, Value>;

/// Render a value as plain text.
///
/// Strings come back unquoted, numbers in their shortest round-trip form,
/// booleans as `True`/`False` and null as `None`. Arrays and objects use
/// their JSON form.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Check whether a value is "empty" in the loose sense table data uses:
/// null, `false`, a blank string, or a numeric zero.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Convert a value to a floating point number.
///
/// Strings are trimmed and parsed, so `" 1.5 "`, `"1e3"` and `"inf"` are all
/// accepted. Booleans count as 1 and 0.
pub fn parse_number(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.ok_or_else(|| CellfmtError::InvalidNumber {
        value: value_to_text(value),
    })
}

/// Convert a value to an integer.
///
/// Float numbers are truncated toward zero. Strings must hold a plain
/// integer; `"3.5"` is rejected rather than truncated.
pub fn parse_integer(value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };
    parsed.ok_or_else(|| CellfmtError::InvalidNumber {
        value: value_to_text(value),
    })
}

/// Most digits after the point any transform will print.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Format a float with exactly `decimal_places` digits after the point.
///
/// Precision is capped at [`MAX_DECIMAL_PLACES`].
pub fn format_fixed(number: f64, decimal_places: usize) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", decimal_places.min(MAX_DECIMAL_PLACES), number)
}

/// Round a value to a fixed number of decimal places.
///
/// Returns `None` when the value is not numeric, leaving the caller to pick
/// a fallback.
pub fn saferound(value: &Value, decimal_places: usize) -> Option<String> {
    parse_number(value)
        .ok()
        .map(|number| format_fixed(number, decimal_places))
}
