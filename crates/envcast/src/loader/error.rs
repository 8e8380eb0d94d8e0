//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define the fatal error variants a load can produce.
//!
//! Invariants:
//! - Every variant identifies the offending declaration by name.
//! - Bad *data* never raises: malformed JSON, wrong top-level shape, empty
//!   containers, non-boolean and non-numeric text all fall through to
//!   default resolution instead of erroring. Only a bad schema (unknown
//!   type) or an unmet requirement fails.

use thiserror::Error;

/// Errors that can occur while loading declared environment variables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A declaration marked required resolved to no value from either the
    /// environment or its default.
    #[error("Missing required environment variable: {0}")]
    MissingRequired(String),

    /// A declaration's type names none of the five recognized kinds. This
    /// is a schema mistake, not a data problem, and aborts the whole load.
    #[error("Invalid type `{ty}` for environment variable {name}")]
    InvalidType { name: String, ty: String },
}
