//! Parser states and transitions
//!
//! ```text
//! SegmentStart --[_a-zA-Z]--> SegmentName --[_0-9a-zA-Z]--> SegmentName
//! SegmentStart --[*]--------> SegmentWildcard
//! SegmentName  --[.]--------> SegmentStart
//! SegmentName  --[[]--------> ArrayStart --[*]--> ArrayWildcard --[]]--> ArrayEnd
//! ArrayStart   --[0-9]------> ArrayLower --[]]--> ArrayEnd
//! ArrayLower   --[.]--------> RangeDot --[.]--> RangeDots
//! RangeDots    --[n]--------> ArrayUnbounded --[]]--> ArrayEnd
//! RangeDots    --[0-9]------> ArrayUpper --[]]--> ArrayEnd
//! SegmentWildcard, ArrayEnd --[.]--> SegmentStart
//! ```
//!
//! `SegmentName`, `SegmentWildcard` and `ArrayEnd` accept end of input. The
//! wildcard state has no edge into `ArrayStart`, so `*[1]` cannot parse.

use super::builder::{ArrayClose, SegmentAccumulator};
use super::expected::{self, CharClass};
use crate::error::KeyResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseState {
    SegmentStart,
    SegmentName,
    SegmentWildcard,
    ArrayStart,
    ArrayWildcard,
    ArrayLower,
    RangeDot,
    RangeDots,
    ArrayUpper,
    ArrayUnbounded,
    ArrayEnd,
}

impl ParseState {
    /// Character classes with an outgoing transition from this state
    pub(crate) const fn expected(self) -> &'static [CharClass] {
        match self {
            ParseState::SegmentStart => expected::SEGMENT_START,
            ParseState::SegmentName => expected::SEGMENT_NAME,
            ParseState::SegmentWildcard => expected::SEGMENT_WILDCARD,
            ParseState::ArrayStart => expected::ARRAY_START,
            ParseState::ArrayWildcard => expected::ARRAY_WILDCARD,
            ParseState::ArrayLower => expected::ARRAY_LOWER,
            ParseState::RangeDot => expected::RANGE_DOT,
            ParseState::RangeDots => expected::RANGE_UPPER_START,
            ParseState::ArrayUpper => expected::ARRAY_UPPER,
            ParseState::ArrayUnbounded => expected::ARRAY_UNBOUNDED,
            ParseState::ArrayEnd => expected::ARRAY_END,
        }
    }

    /// Whether the input may end in this state
    pub(crate) const fn is_accepting(self) -> bool {
        matches!(
            self,
            ParseState::SegmentName | ParseState::SegmentWildcard | ParseState::ArrayEnd
        )
    }

    /// Consume one character
    ///
    /// Returns `Ok(None)` when the state has no transition for `c`; the caller
    /// turns that into a parse error. `Err` is reserved for semantic failures on
    /// an accepted character (bound overflow, upper below lower).
    #[inline]
    pub(crate) fn advance(
        self,
        c: char,
        acc: &mut SegmentAccumulator,
    ) -> KeyResult<Option<ParseState>> {
        let next = match (self, c) {
            (ParseState::SegmentStart, '_' | 'a'..='z' | 'A'..='Z') => {
                acc.push_name(c);
                ParseState::SegmentName
            }
            (ParseState::SegmentStart, '*') => {
                acc.push_name(c);
                ParseState::SegmentWildcard
            }

            (ParseState::SegmentName, '_' | '0'..='9' | 'a'..='z' | 'A'..='Z') => {
                acc.push_name(c);
                ParseState::SegmentName
            }
            (ParseState::SegmentName, '.') | (ParseState::SegmentWildcard, '.') => {
                acc.finish_segment();
                ParseState::SegmentStart
            }
            (ParseState::SegmentName, '[') => ParseState::ArrayStart,

            (ParseState::ArrayStart, '*') => ParseState::ArrayWildcard,
            (ParseState::ArrayStart, '0'..='9') => {
                acc.push_lower_digit(c)?;
                ParseState::ArrayLower
            }
            (ParseState::ArrayWildcard, ']') => {
                acc.close_array(ArrayClose::Wildcard)?;
                ParseState::ArrayEnd
            }

            (ParseState::ArrayLower, '0'..='9') => {
                acc.push_lower_digit(c)?;
                ParseState::ArrayLower
            }
            (ParseState::ArrayLower, '.') => ParseState::RangeDot,
            (ParseState::ArrayLower, ']') => {
                acc.close_array(ArrayClose::Absolute)?;
                ParseState::ArrayEnd
            }

            (ParseState::RangeDot, '.') => ParseState::RangeDots,
            (ParseState::RangeDots, 'n') => ParseState::ArrayUnbounded,
            (ParseState::RangeDots, '0'..='9') | (ParseState::ArrayUpper, '0'..='9') => {
                acc.push_upper_digit(c)?;
                ParseState::ArrayUpper
            }
            (ParseState::ArrayUnbounded, ']') => {
                acc.close_array(ArrayClose::Unbounded)?;
                ParseState::ArrayEnd
            }
            (ParseState::ArrayUpper, ']') => {
                acc.close_array(ArrayClose::Bounded)?;
                ParseState::ArrayEnd
            }

            (ParseState::ArrayEnd, '.') => {
                acc.finish_segment();
                ParseState::SegmentStart
            }

            _ => return Ok(None),
        };
        Ok(Some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_sets_match_transitions() {
        let states = [
            ParseState::SegmentStart,
            ParseState::SegmentName,
            ParseState::SegmentWildcard,
            ParseState::ArrayStart,
            ParseState::ArrayWildcard,
            ParseState::ArrayLower,
            ParseState::RangeDot,
            ParseState::RangeDots,
            ParseState::ArrayUpper,
            ParseState::ArrayUnbounded,
            ParseState::ArrayEnd,
        ];
        for state in states {
            for code in 0x20u8..0x7f {
                let c = char::from(code);
                let mut acc = SegmentAccumulator::default();
                let accepted = state
                    .advance(c, &mut acc)
                    .expect("single digits never overflow")
                    .is_some();
                let advertised = state.expected().iter().any(|class| class.contains(c));
                assert_eq!(
                    accepted, advertised,
                    "state {state:?} disagrees with its expected set on '{c}'"
                );
            }
        }
    }
}
