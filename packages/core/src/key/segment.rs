//! Key segments
//!
//! One dot-delimited element of a key: a name or the segment wildcard `*`,
//! optionally followed by an array specification.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::array_spec::ArraySpec;
use super::types::Key;
use crate::error::{KeyResult, invalid_state_error, validation_error};

pub(crate) const WILDCARD_TOKEN: &str = "*";

/// A single key segment
///
/// Equality and hashing ignore ASCII case of the name. Names are validated by
/// the parser, so every constructor goes through it.
#[derive(Debug, Clone)]
pub struct Segment {
    name: String,
    array: Option<ArraySpec>,
}

impl Segment {
    /// Construct from parts the parser has already validated
    #[inline]
    pub(crate) fn from_parts(name: String, array: Option<ArraySpec>) -> Self {
        debug_assert!(name != WILDCARD_TOKEN || array.is_none());
        Self { name, array }
    }

    /// The segment wildcard `*`
    #[inline]
    #[must_use]
    pub fn wildcard() -> Self {
        Self {
            name: WILDCARD_TOKEN.to_string(),
            array: None,
        }
    }

    /// Parse text holding exactly one segment, e.g. `Volume` or `Input[1]`
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Parse` for malformed text and `KeyError::Validation`
    /// if the text holds more than one segment.
    pub fn parse(text: &str) -> KeyResult<Self> {
        let key = Key::parse(text)?;
        if key.len() != 1 {
            return Err(validation_error(format!(
                "Segment has to represent a single segment, '{text}'"
            )));
        }
        Ok(key.segments()[0].clone())
    }

    /// Pair a plain name with an array specification
    ///
    /// # Errors
    ///
    /// Fails if `name` does not parse as a single segment, is the wildcard, or
    /// already carries an array specification.
    pub fn with_array(name: &str, array: ArraySpec) -> KeyResult<Self> {
        let segment = Self::parse(name)?;
        if segment.is_segment_wildcard() {
            return Err(validation_error(
                "You can not combine a wildcard segment with an array specification",
            ));
        }
        if segment.is_array() {
            return Err(validation_error(format!(
                "Segment name '{name}' also has array in its specification"
            )));
        }
        Ok(Self {
            name: segment.name,
            array: Some(array),
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn array_spec(&self) -> Option<&ArraySpec> {
        self.array.as_ref()
    }

    /// The array specification
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidState` if this is not an array segment.
    pub fn array(&self) -> KeyResult<&ArraySpec> {
        self.array.as_ref().ok_or_else(|| {
            invalid_state_error(format!(
                "Segment '{self}' is not an array. Check 'is_array' before accessing"
            ))
        })
    }

    #[inline]
    #[must_use]
    pub fn is_segment_wildcard(&self) -> bool {
        self.name == WILDCARD_TOKEN
    }

    #[inline]
    #[must_use]
    pub fn is_array_wildcard(&self) -> bool {
        self.array.is_some_and(|array| array.is_wildcard())
    }

    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.is_segment_wildcard() || self.is_array_wildcard()
    }

    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    /// Not a wildcard, and if an array, a single fixed index
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.is_segment_wildcard() && self.array.is_none_or(|array| array.is_absolute())
    }

    /// Whether this segment captures `other`
    ///
    /// The segment wildcard captures anything. Otherwise names must be equal
    /// ignoring case, both or neither must be arrays, and arrays must capture.
    #[must_use]
    pub fn captures(&self, other: &Segment, include_overlaps: bool) -> bool {
        if self.is_segment_wildcard() {
            return true;
        }
        if !self.name.eq_ignore_ascii_case(&other.name) {
            return false;
        }
        match (&self.array, &other.array) {
            (None, None) => true,
            (Some(array), Some(other_array)) => array.captures(other_array, include_overlaps),
            _ => false,
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.array == other.array
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_usize(self.name.len());
        self.array.hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(array) = &self.array {
            write!(f, "{array}")?;
        }
        Ok(())
    }
}
