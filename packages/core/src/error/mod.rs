//! Key error handling module
//!
//! Error types, constructors and conversions for parsing, matching and status
//! tree operations.

pub mod constructors;
mod conversions;
mod types;

pub use constructors::{
    deserialization_error, invalid_state_error, not_found_error, validation_error,
};
pub use types::{ErrorKind, KeyError, KeyResult, ParseError};
