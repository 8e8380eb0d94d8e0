//! Per-type coercion of raw environment strings.
//!
//! Responsibilities:
//! - Convert a raw string into a `Value` of the requested semantic type.
//! - Signal "not coercible" as `None` so the loader falls through to the
//!   declaration's default.
//!
//! Does NOT handle:
//! - Defaults, required-ness, or store writes (see the loader).
//!
//! Invariants:
//! - Every function is pure and never panics on malformed input.
//! - Empty containers (`"{}"`, `"[]"`) and empty text coerce to `None`, so
//!   a placeholder variable cannot override an explicit default.

use serde_json::Value as Json;

use crate::types::{EnvType, Value};

/// Coerce `raw` to the requested type, or `None` when the text does not
/// usefully represent a value of that type.
pub(crate) fn coerce(ty: EnvType, raw: &str) -> Option<Value> {
    match ty {
        EnvType::String => coerce_string(raw),
        EnvType::Boolean => coerce_boolean(raw),
        EnvType::Number => coerce_number(raw),
        EnvType::Object => coerce_object(raw),
        EnvType::Array => coerce_array(raw),
    }
}

fn coerce_string(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    Some(Value::String(raw.to_string()))
}

/// Only the exact literals `true` and `false` count; `"TRUE"`, `"1"`, and
/// `"yes"` are not boolean values.
fn coerce_boolean(raw: &str) -> Option<Value> {
    match raw {
        "true" => Some(Value::Boolean(true)),
        "false" => Some(Value::Boolean(false)),
        _ => None,
    }
}

fn coerce_number(raw: &str) -> Option<Value> {
    let value: f64 = raw.parse().ok()?;
    // "NaN" and "inf" parse in Rust; neither is a usable config number.
    if !value.is_finite() {
        return None;
    }
    Some(Value::Number(value))
}

fn coerce_object(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Json>(raw) {
        Ok(Json::Object(map)) if !map.is_empty() => Some(Value::Object(map)),
        _ => None,
    }
}

fn coerce_array(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Json>(raw) {
        Ok(Json::Array(items)) if !items.is_empty() => Some(Value::Array(items)),
        _ => None,
    }
}
