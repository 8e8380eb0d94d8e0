//! Key normalization for the result store.
//!
//! Every declared name is rewritten to its canonical store key before use:
//! the separator characters space, `-`, `\`, and `/` become `_`, then the
//! whole key is upper-cased.

/// Normalize a declared name into its result-store key.
///
/// `"api key"` becomes `"API_KEY"`; `"a/b\c-d"` becomes `"A_B_C_D"`.
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '-' | '\\' | '/' => '_',
            other => other,
        })
        .collect::<String>()
        .to_uppercase()
}
