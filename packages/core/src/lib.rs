//! # xkey core
//!
//! Structured-path keys for device status and command trees.
//!
//! ## Features
//!
//! - **Key grammar** with segment wildcards and array range specifications
//! - **Set algebra** deciding whether one key pattern encloses or overlaps another
//! - **Total ordering** so keys sort deterministically in maps and listings
//! - **Tree/flat codec** folding flat status maps into nested JSON and
//!   extracting typed values
//! - **Optional parse cache** with statistics
//!
//! ## Usage
//!
//! ```rust
//! use xkey_core::Key;
//!
//! let filter = Key::parse("Audio.Input[*].*").expect("filter");
//! let status = Key::parse("Audio.Input[2].Level").expect("status key");
//!
//! assert!(filter.encloses(&status));
//! assert_eq!(status.to_string(), "Audio.Input[2].Level");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod access;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod key;
pub mod keys;
pub mod parser;

pub use access::{AccessKeys, AccessKeysBuilder};
pub use cache::{CacheStats, KeyCache};
pub use codec::{extract, extract_list, extract_list_as, to_tree};
pub use config::{CacheConfig, ConfigResult, ConfigurationError, Validator};
pub use error::{ErrorKind, KeyError, KeyResult, ParseError};
pub use key::{ArrayBounds, ArraySpec, Key, Segment};
pub use parser::{CharClass, parse};
