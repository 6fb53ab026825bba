//! Key Error Types
//!
//! Core error types for key parsing, matching and status tree conversion.

use std::fmt;

use crate::parser::CharClass;

/// Result type for key operations
pub type KeyResult<T> = Result<T, KeyError>;

/// Classification of [`KeyError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed key text
    Parse,
    /// Semantically invalid construction
    Validation,
    /// Accessor called on a variant that does not support it
    InvalidState,
    /// Lookup found nothing
    NotFound,
    /// Extracted value could not be converted to the requested type
    Deserialization,
}

/// Main key error type
///
/// None of these are retried internally. `InvalidState` signals a caller bug
/// (an accessor used without checking the matching predicate first).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}

impl KeyError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyError::Parse(_) => ErrorKind::Parse,
            KeyError::Validation(_) => ErrorKind::Validation,
            KeyError::InvalidState(_) => ErrorKind::InvalidState,
            KeyError::NotFound(_) => ErrorKind::NotFound,
            KeyError::Deserialization(_) => ErrorKind::Deserialization,
        }
    }

    /// The parse diagnostics, if this is a parse failure
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            KeyError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

/// Syntax error raised by the key parser
///
/// Carries the character index where parsing stopped, the offending character
/// (`None` when the input ended too early) and every character class the
/// parser would have accepted at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) input: String,
    pub(crate) position: usize,
    pub(crate) found: Option<char>,
    pub(crate) expected: &'static [CharClass],
}

impl ParseError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Character index of the failure; equals the input length at end of input
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn found(&self) -> Option<char> {
        self.found
    }

    #[must_use]
    pub fn expected(&self) -> &'static [CharClass] {
        self.expected
    }

    /// Whether `c` is one of the characters accepted at the failing position
    #[must_use]
    pub fn accepts(&self, c: char) -> bool {
        self.expected.iter().any(|class| class.contains(c))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse '{}'. ", self.input)?;
        match self.found {
            Some(c) => write!(f, "Illegal character '{c}' at position {}. ", self.position)?,
            None => write!(f, "Unexpected end of string at position {}. ", self.position)?,
        }
        if self.expected.is_empty() {
            return write!(f, "Expected nothing more.");
        }
        write!(f, "Expected to be ")?;
        for (i, class) in self.expected.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "'{class}'")?;
        }
        write!(f, ".")
    }
}

impl std::error::Error for ParseError {}
