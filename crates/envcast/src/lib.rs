//! Declaration-driven environment variable loading.
//!
//! This crate reads named variables from the process environment (or a
//! caller-supplied map), coerces each to a declared semantic type, applies
//! default and required-ness rules, and exposes the resolved values under
//! normalized keys.

mod loader;
pub mod types;

pub use loader::{EnvLoader, LoadError, normalize_key};
pub use types::{Declaration, EnvType, Value};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
