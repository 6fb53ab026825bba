//! Keys: dotted paths into the device status/command tree
//!
//! A key is on the form `Audio.Input[1].Volume`. Segments are plain names,
//! the segment wildcard `*`, or names with an array specification: `[*]`,
//! `[3]`, `[1..3]` or `[1..n]`.
//!
//! Typical checks built on keys:
//! - a query filter is valid if it overlaps a schema key
//! - a status, command or event key is valid if a filter, schema or access
//!   grant encloses it

pub mod array_spec;
mod matching;
mod operations;
mod ordering;
pub mod segment;
mod serde_impl;
pub mod types;

pub use array_spec::{ArrayBounds, ArraySpec};
pub use segment::Segment;
pub use types::Key;
