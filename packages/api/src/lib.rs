//! xkey public API
//!
//! Structured-path keys for device status and command trees, with a fluent
//! builder and a typed view over flat status snapshots.
//!
//! ```rust
//! use serde_json::json;
//! use xkey::{KeyBuilder, StatusView};
//!
//! let status = StatusView::from_flat_json(&json!({
//!     "Audio.Input[1].Level": 12,
//!     "Audio.Input[2].Level": 30,
//! }))
//! .expect("flat status");
//!
//! let level = KeyBuilder::new("Audio")
//!     .child("Input")
//!     .index(2)
//!     .child("Level")
//!     .build()
//!     .expect("key");
//! assert_eq!(status.get::<u32>(&level).expect("level"), Some(30));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod status;

// Re-export all public API components
pub use builder::*;
pub use status::StatusView;

// Re-export important types from the core package
pub use xkey_core::{
    AccessKeys, AccessKeysBuilder, ArrayBounds, ArraySpec, CacheConfig, CacheStats, ErrorKind,
    Key, KeyCache, KeyError, KeyResult, ParseError, Segment, codec, keys,
};

/// Parse key text
///
/// Shorthand for `Key::parse(text)`
///
/// # Errors
///
/// Returns `KeyError::Parse` for malformed text and `KeyError::Validation` for
/// invalid array bounds.
pub fn parse(text: &str) -> KeyResult<Key> {
    Key::parse(text)
}

/// Start building a key with a named root segment
///
/// Shorthand for `KeyBuilder::new(name)`
#[must_use]
pub fn key(name: &str) -> KeyBuilder<NameOpen> {
    KeyBuilder::new(name)
}
