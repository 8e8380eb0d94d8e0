//! Declaration-driven loading into a normalized store.
//!
//! Responsibilities:
//! - Orchestrate the per-declaration pipeline: look up the raw value,
//!   coerce it, resolve against the default and required policy, and store
//!   the result under the normalized key.
//! - Expose the accumulated store via `export` and `get`.
//!
//! Does NOT handle:
//! - Raw value lookup details (see env.rs).
//! - Per-type coercion rules (see coerce.rs).
//!
//! Invariants / Assumptions:
//! - Loads are fail-fast: the first error aborts a batch, and entries
//!   written before the failure remain visible (not transactional).
//! - Every successful `load_one` writes its key, even when the resolved
//!   value is `Value::Absent`.
//! - Two names that normalize to the same key overwrite; the later load
//!   wins.

mod coerce;
mod env;
mod error;
mod key;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::{Declaration, EnvType, Value};
use env::EnvSource;

pub use error::LoadError;
pub use key::normalize_key;

/// Loads declared environment variables into a map of typed values keyed by
/// normalized name.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    envs: HashMap<String, Value>,
    source: EnvSource,
}

impl EnvLoader {
    /// Loader reading from the process environment, with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader reading from a caller-supplied read-only mapping instead of
    /// the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self {
            envs: HashMap::new(),
            source: EnvSource::Map(vars),
        }
    }

    /// Loader over the process environment that immediately loads `decls`.
    ///
    /// Construction fails with the first error `load_many` would report.
    pub fn with_declarations(decls: &[Declaration]) -> Result<Self, LoadError> {
        let mut loader = Self::new();
        loader.load_many(decls)?;
        Ok(loader)
    }

    /// Loader over `vars` that immediately loads `decls`.
    pub fn from_map_with_declarations(
        vars: HashMap<String, String>,
        decls: &[Declaration],
    ) -> Result<Self, LoadError> {
        let mut loader = Self::from_map(vars);
        loader.load_many(decls)?;
        Ok(loader)
    }

    /// Load one declared variable into the store.
    ///
    /// The raw value is coerced to the declared type; text that does not
    /// usefully represent that type is treated the same as an unset
    /// variable and falls through to the default. Only two conditions
    /// fail: an unrecognized type name, and a required declaration that
    /// resolves to no value at all. On success the normalized key is always
    /// written, with `Value::Absent` when nothing supplied a value.
    pub fn load_one(&mut self, decl: &Declaration) -> Result<(), LoadError> {
        let ty = EnvType::from_name(&decl.ty).ok_or_else(|| LoadError::InvalidType {
            name: decl.name.clone(),
            ty: decl.ty.clone(),
        })?;

        let coerced = self.source.var_or_none(&decl.name).and_then(|raw| {
            let coerced = coerce::coerce(ty, &raw);
            if coerced.is_none() {
                warn!(
                    name = %decl.name,
                    %ty,
                    "environment value not coercible, falling back to default"
                );
            }
            coerced
        });

        let resolved = coerced
            .or_else(|| decl.default.clone())
            .unwrap_or(Value::Absent);

        if decl.required && resolved.is_absent() {
            return Err(LoadError::MissingRequired(decl.name.clone()));
        }

        let store_key = normalize_key(&decl.name);
        debug!(name = %decl.name, key = %store_key, "resolved environment variable");
        self.envs.insert(store_key, resolved);
        Ok(())
    }

    /// Load a batch of declarations in order.
    ///
    /// Fail-fast: the first failure aborts the remaining declarations and
    /// leaves earlier writes in place.
    pub fn load_many(&mut self, decls: &[Declaration]) -> Result<(), LoadError> {
        for decl in decls {
            self.load_one(decl)?;
        }
        Ok(())
    }

    /// Read-only view of the accumulated store, keyed by normalized name.
    pub fn export(&self) -> &HashMap<String, Value> {
        &self.envs
    }

    /// Look up a resolved value by declared (or already normalized) name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.envs.get(&normalize_key(name))
    }
}
