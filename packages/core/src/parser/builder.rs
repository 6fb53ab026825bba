//! Segment accumulator driven by parser transitions
//!
//! Collects name characters and array bound digits for the segment under
//! construction and seals it into the segment list on `.` or end of input.

use crate::error::{KeyResult, validation_error};
use crate::key::{ArraySpec, Key, Segment};

/// How an array qualifier was closed by `]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArrayClose {
    Wildcard,
    Absolute,
    Bounded,
    Unbounded,
}

#[derive(Debug, Default)]
pub(crate) struct SegmentAccumulator {
    segments: Vec<Segment>,
    name: String,
    lower: u32,
    upper: u32,
    array: Option<ArraySpec>,
}

impl SegmentAccumulator {
    pub(crate) fn with_capacity(text_len: usize) -> Self {
        Self {
            // rough guess: one segment per eight characters
            segments: Vec::with_capacity(text_len / 8 + 1),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn push_name(&mut self, c: char) {
        self.name.push(c);
    }

    #[inline]
    pub(crate) fn push_lower_digit(&mut self, c: char) -> KeyResult<()> {
        self.lower = accumulate(self.lower, c)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn push_upper_digit(&mut self, c: char) -> KeyResult<()> {
        self.upper = accumulate(self.upper, c)?;
        Ok(())
    }

    pub(crate) fn close_array(&mut self, close: ArrayClose) -> KeyResult<()> {
        let spec = match close {
            ArrayClose::Wildcard => ArraySpec::wildcard(),
            ArrayClose::Absolute => ArraySpec::absolute(self.lower),
            ArrayClose::Bounded => ArraySpec::bounded_range(self.lower, self.upper)?,
            ArrayClose::Unbounded => ArraySpec::unbounded_range(self.lower),
        };
        self.array = Some(spec);
        self.lower = 0;
        self.upper = 0;
        Ok(())
    }

    /// Seal the segment under construction
    pub(crate) fn finish_segment(&mut self) {
        let name = std::mem::take(&mut self.name);
        let array = self.array.take();
        self.segments.push(Segment::from_parts(name, array));
    }

    pub(crate) fn build(self) -> KeyResult<Key> {
        Key::from_segments(self.segments)
    }
}

#[inline]
fn accumulate(value: u32, c: char) -> KeyResult<u32> {
    let digit = c
        .to_digit(10)
        .ok_or_else(|| validation_error(format!("'{c}' is not a digit")))?;
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(digit))
        .ok_or_else(|| validation_error("Array bound is not a valid 32-bit integer. Too big?"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_rejects_overflow() {
        let max = "4294967295"
            .chars()
            .try_fold(0, accumulate)
            .expect("u32::MAX should fit");
        assert_eq!(max, u32::MAX);
        assert!(accumulate(max, '0').is_err());
    }
}
