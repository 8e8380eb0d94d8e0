//! Data types for variable declarations and resolved values.

mod declaration;
mod value;

pub use declaration::Declaration;
pub use value::{EnvType, Value};
