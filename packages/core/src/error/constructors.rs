//! Error constructor helpers
//!
//! Factory functions for the message-carrying [`KeyError`] variants so call sites
//! stay on one line.

use super::types::KeyError;

/// Creates a validation error
pub fn validation_error(message: impl Into<String>) -> KeyError {
    KeyError::Validation(message.into())
}

/// Creates an invalid state error
///
/// Used by accessors that are only defined for one variant, e.g.
/// `ArraySpec::absolute_index` on a range.
pub fn invalid_state_error(message: impl Into<String>) -> KeyError {
    KeyError::InvalidState(message.into())
}

/// Creates a lookup error
pub fn not_found_error(message: impl Into<String>) -> KeyError {
    KeyError::NotFound(message.into())
}

/// Creates a deserialization error for a converted status node
///
/// # Arguments
/// * `message` - Serde error details
/// * `target_type` - Name of the type the node was converted into
pub fn deserialization_error(message: impl Into<String>, target_type: &'static str) -> KeyError {
    KeyError::Deserialization(format!("{} (target type {target_type})", message.into()))
}
