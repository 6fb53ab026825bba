//! Structural editing and positional lookups
//!
//! Editing never mutates a key in place; `append` and `strip` build new keys.

use std::ptr;

use super::segment::Segment;
use super::types::Key;
use crate::error::{KeyResult, not_found_error, validation_error};

impl Key {
    /// Append segments to the end of this key
    ///
    /// Each value is parsed as a single segment, e.g. `key.append(["*"])`.
    ///
    /// # Errors
    ///
    /// Fails if a value does not parse or holds more than one segment.
    pub fn append<I, S>(&self, segment_values: I) -> KeyResult<Key>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = self.segments.to_vec();
        for value in segment_values {
            segments.push(Segment::parse(value.as_ref())?);
        }
        Key::from_segments(segments)
    }

    /// Strip leading segments captured by `prefix`
    ///
    /// Position `i` of this key is dropped when `prefix[i]` captures it. Every
    /// other position is kept, including everything past the end of `prefix`.
    /// Used to make a matched key relative to the pattern that matched it.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Validation` if no segment would remain.
    pub fn strip(&self, prefix: &[Segment]) -> KeyResult<Key> {
        let kept = self
            .segments
            .iter()
            .enumerate()
            .filter(|(i, segment)| {
                prefix
                    .get(*i)
                    .is_none_or(|strip| !strip.captures(segment, false))
            })
            .map(|(_, segment)| segment.clone());
        Key::from_segments(kept).map_err(|_| {
            validation_error(format!("Stripping '{self}' would leave an empty key"))
        })
    }

    /// Index of the first array segment named `array_segment_name`
    ///
    /// The name is compared ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if no segment has that name or the segment
    /// is not an absolute array.
    pub fn array_index_of(&self, array_segment_name: &str) -> KeyResult<u32> {
        let segment = self
            .segments
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(array_segment_name))
            .ok_or_else(|| {
                not_found_error(format!(
                    "Key '{self}' doesn't contain a segment named '{array_segment_name}'"
                ))
            })?;
        segment
            .array_spec()
            .filter(|array| array.is_absolute())
            .and_then(|array| array.absolute_index().ok())
            .ok_or_else(|| {
                not_found_error(format!(
                    "Segment '{segment}' is not an absolute array. For key: {self}"
                ))
            })
    }

    /// Slot index of `segment`, which must be borrowed from this key
    ///
    /// Two segments can be equal by value at different positions (`a[*].b[*]`
    /// style patterns), so the lookup compares slot addresses, not values.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if `segment` is not one of this key's slots.
    pub fn identity_index_of(&self, segment: &Segment) -> KeyResult<usize> {
        self.segments
            .iter()
            .position(|s| ptr::eq(s, segment))
            .ok_or_else(|| {
                not_found_error(format!(
                    "Segment with value '{segment}' is not part of key '{self}'"
                ))
            })
    }

    /// All segments before `segment`
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if `segment` is not one of this key's slots.
    pub fn segments_before(&self, segment: &Segment) -> KeyResult<&[Segment]> {
        let index = self.identity_index_of(segment)?;
        Ok(&self.segments[..index])
    }

    /// The segment directly before `segment`, if any
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if `segment` is not one of this key's slots.
    pub fn segment_before(&self, segment: &Segment) -> KeyResult<Option<&Segment>> {
        let index = self.identity_index_of(segment)?;
        Ok(index.checked_sub(1).map(|before| &self.segments[before]))
    }
}
