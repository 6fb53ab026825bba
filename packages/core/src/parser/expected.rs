//! Character classes accepted by parser states
//!
//! Each state advertises the classes it has transitions for, in declaration
//! order, so a failed parse can say exactly what would have been accepted.

use std::fmt;

/// A single character or an inclusive character range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Single(char),
    Range(char, char),
}

impl CharClass {
    #[inline]
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        match self {
            CharClass::Single(single) => single == c,
            CharClass::Range(low, high) => low <= c && c <= high,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Single(c) => write!(f, "{c}"),
            CharClass::Range(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

const UNDERSCORE: CharClass = CharClass::Single('_');
const LOWERCASE: CharClass = CharClass::Range('a', 'z');
const UPPERCASE: CharClass = CharClass::Range('A', 'Z');
const DIGIT: CharClass = CharClass::Range('0', '9');
const STAR: CharClass = CharClass::Single('*');
const DOT: CharClass = CharClass::Single('.');
const OPEN_BRACKET: CharClass = CharClass::Single('[');
const CLOSE_BRACKET: CharClass = CharClass::Single(']');
const INFINITY: CharClass = CharClass::Single('n');

pub(crate) const SEGMENT_START: &[CharClass] = &[UNDERSCORE, LOWERCASE, UPPERCASE, STAR];
pub(crate) const SEGMENT_NAME: &[CharClass] =
    &[UNDERSCORE, DIGIT, LOWERCASE, UPPERCASE, DOT, OPEN_BRACKET];
pub(crate) const SEGMENT_WILDCARD: &[CharClass] = &[DOT];
pub(crate) const ARRAY_START: &[CharClass] = &[STAR, DIGIT];
pub(crate) const ARRAY_WILDCARD: &[CharClass] = &[CLOSE_BRACKET];
pub(crate) const ARRAY_LOWER: &[CharClass] = &[DIGIT, DOT, CLOSE_BRACKET];
pub(crate) const RANGE_DOT: &[CharClass] = &[DOT];
pub(crate) const RANGE_UPPER_START: &[CharClass] = &[INFINITY, DIGIT];
pub(crate) const ARRAY_UNBOUNDED: &[CharClass] = &[CLOSE_BRACKET];
pub(crate) const ARRAY_UPPER: &[CharClass] = &[DIGIT, CLOSE_BRACKET];
pub(crate) const ARRAY_END: &[CharClass] = &[DOT];
