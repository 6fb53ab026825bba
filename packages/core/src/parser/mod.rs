//! Key parser
//!
//! A single pass, character driven state machine with no lookahead and no
//! backtracking. Every character either follows a transition of the current
//! state or fails the parse with the exact position and the characters that
//! state would have accepted.
//!
//! Keys are parsed at high volume (schemas, filters and every status or event
//! key in a payload), which is why this is a hand written automaton instead of
//! a regular expression.

mod builder;
mod expected;
mod states;

pub use expected::CharClass;

use builder::SegmentAccumulator;
use states::ParseState;

use crate::error::{KeyError, KeyResult, ParseError, validation_error};
use crate::key::Key;

/// Parse key text into a [`Key`]
///
/// # Errors
///
/// Returns `KeyError::Parse` for text outside the grammar and
/// `KeyError::Validation` for array bounds that overflow or are out of order.
pub fn parse(text: &str) -> KeyResult<Key> {
    let mut state = ParseState::SegmentStart;
    let mut acc = SegmentAccumulator::with_capacity(text.len());
    let mut position = 0;

    for c in text.chars() {
        state = match state.advance(c, &mut acc) {
            Ok(Some(next)) => next,
            Ok(None) => return Err(syntax_error(text, position, Some(c), state)),
            Err(error) => return Err(in_context(text, position, error)),
        };
        position += 1;
    }

    if !state.is_accepting() {
        return Err(syntax_error(text, position, None, state));
    }
    acc.finish_segment();
    acc.build()
}

fn syntax_error(text: &str, position: usize, found: Option<char>, state: ParseState) -> KeyError {
    KeyError::Parse(ParseError {
        input: text.to_owned(),
        position,
        found,
        expected: state.expected(),
    })
}

fn in_context(text: &str, position: usize, error: KeyError) -> KeyError {
    match error {
        KeyError::Validation(message) => validation_error(format!(
            "Failed to parse '{text}' at position {position}. {message}"
        )),
        other => other,
    }
}
