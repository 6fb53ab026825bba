//! Well-known status and event keys
//!
//! Keys the device integrations read or subscribe to most often, parsed once
//! on first use.

pub mod events;
pub mod status;
