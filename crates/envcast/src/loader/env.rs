//! Environment sources for the loader.
//!
//! Responsibilities:
//! - Abstract where raw values come from: the process environment or a
//!   caller-supplied read-only map.
//! - Filter empty and whitespace-only values to "unset".
//!
//! Does NOT handle:
//! - Type coercion (see coerce.rs).
//! - Defaults or required-ness (see the loader).
//!
//! Invariants:
//! - "Key not set" and "key set to blank" are both reported as `None`.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::HashMap;

/// Where the loader reads raw variable values from.
#[derive(Debug, Clone, Default)]
pub(crate) enum EnvSource {
    /// The hosting process's environment, via `std::env::var`.
    #[default]
    Process,
    /// A caller-supplied read-only mapping, for hosts that capture the
    /// environment up front and for tests.
    Map(HashMap<String, String>),
}

impl EnvSource {
    /// Read a variable, returning `None` if unset, empty, or
    /// whitespace-only. Present values are trimmed.
    pub(crate) fn var_or_none(&self, key: &str) -> Option<String> {
        let raw = match self {
            EnvSource::Process => std::env::var(key).ok()?,
            EnvSource::Map(vars) => vars.get(key)?.clone(),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == raw.len() {
            // No trimming needed, return original to avoid allocation
            Some(raw)
        } else {
            Some(trimmed.to_string())
        }
    }
}
