//! Key builder API modules
//!
//! Fluent construction of keys segment by segment, with array methods only
//! reachable where the grammar allows them.

pub mod array;
pub mod core;

pub use self::core::*;
