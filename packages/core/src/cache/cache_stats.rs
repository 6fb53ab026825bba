//! Cache statistics and metrics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for the key parse cache
#[derive(Debug)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: AtomicU64,
    /// Number of lookups that had to parse
    pub misses: AtomicU64,
    /// Number of entries removed to make room
    pub evictions: AtomicU64,
    /// Number of lookups whose text failed to parse
    pub parse_failures: AtomicU64,
}

impl CacheStats {
    /// Create new cache statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` evicted entries
    pub fn record_evictions(&self, count: u64) {
        self.evictions.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a parse failure
    pub fn record_parse_failure(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get hit ratio
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else if total > (1u64 << 53) {
            // past f64's exact integer range, divide in fixed point first
            let hit_rate_scaled = (u128::from(hits) * 1_000_000_000) / u128::from(total);
            (hit_rate_scaled as f64) / 1_000_000_000.0
        } else {
            (hits as f64) / (total as f64)
        }
    }
}

impl Default for CacheStats {
    fn default() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            parse_failures: AtomicU64::new(0),
        }
    }
}
