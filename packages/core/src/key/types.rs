//! Core key type
//!
//! A key is a dotted path such as `Audio.Input[1].Volume` addressing a node in
//! the device status/command tree. Keys are immutable; every edit returns a new
//! key sharing nothing mutable with the old one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use super::segment::Segment;
use crate::error::{KeyError, KeyResult, validation_error};
use crate::parser;

pub(crate) const SEGMENT_SEPARATOR: char = '.';

/// An ordered, non-empty sequence of segments
///
/// Segments live in a shared `Arc<[Segment]>`, so cloning a key is a reference
/// count bump and keys can be handed across threads freely. The slice is also
/// the arena for identity lookups: a `&Segment` borrowed from a key is
/// identified by its slot, never by value.
#[derive(Clone)]
pub struct Key {
    pub(crate) segments: Arc<[Segment]>,
}

impl Key {
    /// Parse key text
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Parse` with the failing position and the accepted
    /// characters for text outside the grammar, and `KeyError::Validation` for
    /// well-formed text with invalid array bounds.
    #[inline]
    pub fn parse(text: &str) -> KeyResult<Self> {
        parser::parse(text)
    }

    /// Build a key from segments
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Validation` if `segments` is empty.
    pub fn from_segments<I>(segments: I) -> KeyResult<Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        let segments: Arc<[Segment]> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(validation_error("A key must consist of at least one segment"));
        }
        Ok(Self { segments })
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn last_segment(&self) -> &Segment {
        // non-empty by construction
        &self.segments[self.segments.len() - 1]
    }

    /// Number of segments, always at least one
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if every segment is absolute (no wildcards, no ranges)
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.segments.iter().all(Segment::is_absolute)
    }

    /// True if any segment is a segment or array wildcard
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.segments, &other.segments) || self.segments == other.segments
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({self})")
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Key {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
