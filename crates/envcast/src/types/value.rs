//! Resolved value types.
//!
//! Responsibilities:
//! - Define `EnvType`, the five semantic types a declaration can request.
//! - Define `Value`, the tagged result of resolving one declaration,
//!   including an explicit `Absent` case for "no value supplied".
//! - Provide typed accessors for consumers of the exported map.
//!
//! Does NOT handle:
//! - Coercion from raw strings (see the loader's coerce module).
//! - Key normalization or storage (see the loader).
//!
//! Invariants:
//! - `EnvType::from_name` accepts exactly the five lowercase names.
//! - `Value::Absent` serializes as JSON null.
//! - Each accessor returns `Some` only for its matching variant.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// The semantic type a declaration expects its variable to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    String,
    Boolean,
    Number,
    Object,
    Array,
}

impl EnvType {
    /// Parse a lowercase type name; `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(EnvType::String),
            "boolean" => Some(EnvType::Boolean),
            "number" => Some(EnvType::Number),
            "object" => Some(EnvType::Object),
            "array" => Some(EnvType::Array),
            _ => None,
        }
    }

    /// Canonical lowercase name, as spelled in declaration payloads.
    pub fn name(self) -> &'static str {
        match self {
            EnvType::String => "string",
            EnvType::Boolean => "boolean",
            EnvType::Number => "number",
            EnvType::Object => "object",
            EnvType::Array => "array",
        }
    }
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved environment value, tagged by semantic type.
///
/// `Absent` records a declaration that resolved to no value at all: nothing
/// usable in the environment and no default. Non-required declarations still
/// get their key written with `Absent` so the exported map always covers the
/// full declaration batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Absent,
    Boolean(bool),
    Number(f64),
    String(String),
    Object(Map<String, Json>),
    Array(Vec<Json>),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Json>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
