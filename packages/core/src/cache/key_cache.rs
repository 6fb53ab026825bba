//! Concurrent memoizing parse cache
//!
//! Callers that parse the same key text repeatedly (schema loading, event
//! filters) construct one of these and share it. Nothing in the crate holds a
//! global instance.

use dashmap::DashMap;
use tracing::{debug, trace};

use super::cache_stats::CacheStats;
use crate::config::{CacheConfig, ConfigResult, Validator};
use crate::error::KeyResult;
use crate::key::Key;

/// Bounded text to [`Key`] cache
#[derive(Debug)]
pub struct KeyCache {
    cache: DashMap<String, Key>,
    config: CacheConfig,
    stats: CacheStats,
}

impl KeyCache {
    /// Create a cache with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(CacheConfig::default())
    }

    /// Create a cache from `config`
    ///
    /// # Errors
    ///
    /// Returns the `ConfigurationError` reported by validating `config`.
    pub fn with_config(config: CacheConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CacheConfig) -> Self {
        Self {
            cache: DashMap::with_capacity(config.max_entries.min(1024)),
            config,
            stats: CacheStats::new(),
        }
    }

    /// Return the cached key for `text`, parsing and caching it on a miss
    ///
    /// Parse failures are not cached.
    ///
    /// # Errors
    ///
    /// Returns the parse error for `text`.
    pub fn get_or_parse(&self, text: &str) -> KeyResult<Key> {
        if !self.config.enabled {
            self.stats.record_miss();
            return self.parse_uncached(text);
        }

        if let Some(key) = self.cache.get(text) {
            self.stats.record_hit();
            trace!("Key cache hit for {}", text);
            return Ok(key.clone());
        }

        self.stats.record_miss();
        let key = self.parse_uncached(text)?;

        if self.cache.len() >= self.config.max_entries {
            self.evict_entries();
        }

        // another thread may have raced us here; keep whichever landed first
        let cached = self
            .cache
            .entry(text.to_owned())
            .or_insert(key)
            .value()
            .clone();
        debug!("Cached key {}", cached);
        Ok(cached)
    }

    fn parse_uncached(&self, text: &str) -> KeyResult<Key> {
        Key::parse(text).inspect_err(|_| self.stats.record_parse_failure())
    }

    /// Evict entries when cache is full
    fn evict_entries(&self) {
        let to_remove: Vec<String> = self
            .cache
            .iter()
            .take(self.config.max_entries / 10) // Remove 10% when full
            .map(|entry| entry.key().clone())
            .collect();

        let mut evicted = 0u64;
        for text in to_remove {
            if self.cache.remove(&text).is_some() {
                evicted += 1;
            }
        }
        self.stats.record_evictions(evicted);

        debug!(
            "Evicted {} key cache entries, cache size: {}",
            evicted,
            self.cache.len()
        );
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached key, keeping statistics
    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl Default for KeyCache {
    fn default() -> Self {
        Self::new()
    }
}
