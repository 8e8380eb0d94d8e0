//! Variable declarations.
//!
//! Responsibilities:
//! - Define `Declaration`, the caller-supplied description of one expected
//!   environment variable (name, type, required flag, default).
//! - Provide builder-style constructors and serde support so declaration
//!   batches can be read from JSON payloads.
//!
//! Does NOT handle:
//! - Validating the type name (done at load time, see the loader).
//!
//! Invariants:
//! - Declarations are plain immutable data; they hold no loader state.
//! - A missing `type` field in a payload defaults to `"string"`.

use serde::{Deserialize, Serialize};

use crate::types::{EnvType, Value};

/// A caller-supplied description of one expected environment variable.
///
/// The type field is carried as a string so that declaration batches read
/// from JSON keep their original spelling; an unrecognized type surfaces as
/// [`LoadError::InvalidType`](crate::LoadError::InvalidType) when the
/// declaration is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Environment key to read.
    pub name: String,
    /// Expected semantic type: `string`, `boolean`, `number`, `object`, or
    /// `array`.
    #[serde(rename = "type", default = "default_type")]
    pub ty: String,
    /// Fail the load when neither the environment nor the default supplies
    /// a value.
    #[serde(default)]
    pub required: bool,
    /// Fallback used when the environment supplies no usable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

fn default_type() -> String {
    EnvType::String.name().to_string()
}

impl Declaration {
    /// Declaration of `name` with a recognized type, not required, no
    /// default.
    pub fn new(name: impl Into<String>, ty: EnvType) -> Self {
        Self {
            name: name.into(),
            ty: ty.name().to_string(),
            required: false,
            default: None,
        }
    }

    /// Declaration with a raw type name, recognized or not. Loading a
    /// declaration whose type is unrecognized fails the whole batch.
    pub fn with_type_name(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            default: None,
        }
    }

    /// Attach a fallback value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the variable as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
