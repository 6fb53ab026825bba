//! Optional parse cache
//!
//! `DashMap` backed memoization of key text with atomic statistics.

pub mod cache_stats;
pub mod key_cache;

pub use cache_stats::CacheStats;
pub use key_cache::KeyCache;
