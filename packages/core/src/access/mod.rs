//! Integration access grants
//!
//! Which commands, statuses and events an integration may touch, expressed as
//! key patterns.

pub mod access_keys;

pub use access_keys::{AccessKeys, AccessKeysBuilder};
