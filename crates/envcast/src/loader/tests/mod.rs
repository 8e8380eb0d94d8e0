//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test per-type coercion acceptance and rejection.
//! - Test key normalization.
//! - Test default/required resolution, batch semantics, and export.
//! - Test process-environment reads with isolation.
//!
//! Invariants:
//! - Process-env tests use `serial_test` plus `global_test_lock()` to
//!   prevent environment variable pollution.
//! - Pure-logic tests run against injected maps and need no isolation.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
