//! Array specifications
//!
//! The bracketed qualifier of a segment: `[*]`, `[3]`, `[1..5]` or `[1..n]`.

use std::fmt;

use crate::error::{KeyResult, invalid_state_error, validation_error};

pub(crate) const ARRAY_START_TOKEN: char = '[';
pub(crate) const ARRAY_END_TOKEN: char = ']';
pub(crate) const RANGE_INDICATOR_TOKEN: &str = "..";
pub(crate) const INFINITY_TOKEN: char = 'n';

/// Index qualifier of an array segment
///
/// Only constructible through the factory functions, which keeps
/// `lower <= upper` for bounded ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArraySpec(ArrayBounds);

/// Read-only view of an [`ArraySpec`] for exhaustive matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayBounds {
    /// `[*]`
    Wildcard,
    /// `[index]`
    Absolute(u32),
    /// `[lower..upper]`
    Bounded { lower: u32, upper: u32 },
    /// `[lower..n]`
    Unbounded { lower: u32 },
}

impl ArraySpec {
    #[inline]
    #[must_use]
    pub const fn wildcard() -> Self {
        Self(ArrayBounds::Wildcard)
    }

    #[inline]
    #[must_use]
    pub const fn absolute(index: u32) -> Self {
        Self(ArrayBounds::Absolute(index))
    }

    #[inline]
    #[must_use]
    pub const fn unbounded_range(lower: u32) -> Self {
        Self(ArrayBounds::Unbounded { lower })
    }

    /// Create a `[lower..upper]` range
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Validation` if `upper < lower`.
    pub fn bounded_range(lower: u32, upper: u32) -> KeyResult<Self> {
        if upper < lower {
            return Err(validation_error(format!(
                "Upper bound must be greater or equal to lower bound: {upper}>={lower}"
            )));
        }
        Ok(Self(ArrayBounds::Bounded { lower, upper }))
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> ArrayBounds {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self.0, ArrayBounds::Wildcard)
    }

    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        matches!(self.0, ArrayBounds::Absolute(_))
    }

    #[inline]
    #[must_use]
    pub fn is_unbounded_range(&self) -> bool {
        matches!(self.0, ArrayBounds::Unbounded { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_bounded_range(&self) -> bool {
        matches!(self.0, ArrayBounds::Bounded { .. })
    }

    /// The fixed index of an absolute specification
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidState` unless `is_absolute()` holds.
    pub fn absolute_index(&self) -> KeyResult<u32> {
        match self.0 {
            ArrayBounds::Absolute(index) => Ok(index),
            _ => Err(invalid_state_error(format!(
                "{self} is not an absolute index. Check 'is_absolute' before use"
            ))),
        }
    }

    /// Lower bound of a bounded or unbounded range
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidState` for wildcards and absolute indexes.
    pub fn lower_bound(&self) -> KeyResult<u32> {
        match self.0 {
            ArrayBounds::Bounded { lower, .. } | ArrayBounds::Unbounded { lower } => Ok(lower),
            _ => Err(invalid_state_error(format!(
                "{self} is not a range. Check 'is_unbounded_range' or 'is_bounded_range' before use"
            ))),
        }
    }

    /// Upper bound of a bounded range
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidState` unless `is_bounded_range()` holds.
    pub fn upper_bound(&self) -> KeyResult<u32> {
        match self.0 {
            ArrayBounds::Bounded { upper, .. } => Ok(upper),
            _ => Err(invalid_state_error(format!(
                "{self} is not a bounded range. Check 'is_bounded_range' before use"
            ))),
        }
    }

    /// Whether this specification captures `other`
    ///
    /// A wildcard captures everything. Otherwise both sides are reduced to an
    /// inclusive interval (an absolute index is `[i, i]`, an unbounded range ends
    /// at infinity). With `include_overlaps` the intervals only need to
    /// intersect, without it `self` must contain `other`.
    #[must_use]
    pub fn captures(&self, other: &ArraySpec, include_overlaps: bool) -> bool {
        if self.is_wildcard() {
            return true;
        }
        let (lower, upper) = self.interval();
        let (other_lower, other_upper) = other.interval();
        if include_overlaps {
            other_upper >= lower && other_lower <= upper
        } else {
            lower <= other_lower && upper >= other_upper
        }
    }

    /// Effective inclusive interval; a wildcard spans everything
    #[inline]
    pub(crate) fn interval(&self) -> (u64, u64) {
        match self.0 {
            ArrayBounds::Wildcard => (0, u64::MAX),
            ArrayBounds::Absolute(index) => (u64::from(index), u64::from(index)),
            ArrayBounds::Bounded { lower, upper } => (u64::from(lower), u64::from(upper)),
            ArrayBounds::Unbounded { lower } => (u64::from(lower), u64::MAX),
        }
    }
}

impl fmt::Display for ArraySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ArrayBounds::Wildcard => write!(f, "{ARRAY_START_TOKEN}*{ARRAY_END_TOKEN}"),
            ArrayBounds::Absolute(index) => write!(f, "{ARRAY_START_TOKEN}{index}{ARRAY_END_TOKEN}"),
            ArrayBounds::Bounded { lower, upper } => write!(
                f,
                "{ARRAY_START_TOKEN}{lower}{RANGE_INDICATOR_TOKEN}{upper}{ARRAY_END_TOKEN}"
            ),
            ArrayBounds::Unbounded { lower } => write!(
                f,
                "{ARRAY_START_TOKEN}{lower}{RANGE_INDICATOR_TOKEN}{INFINITY_TOKEN}{ARRAY_END_TOKEN}"
            ),
        }
    }
}
