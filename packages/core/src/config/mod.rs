//! Configuration for the optional parse cache
//!
//! Presets follow the usual default / aggressive / conservative / disabled
//! split. Every config implements [`Validator`] and is validated when a cache
//! is constructed from it.

pub mod validation;

pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Parse cache configuration and limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether parsed keys are memoized at all
    pub enabled: bool,
    /// Maximum number of cached keys before eviction kicks in
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: ConfigDefaults::DEFAULT_CACHE_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Large cache for services that see the same keys over and over
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            enabled: true,
            max_entries: 50_000,
        }
    }

    /// Small cache for memory constrained callers
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            enabled: true,
            max_entries: 200,
        }
    }

    /// Create no-cache configuration (disabled caching)
    #[must_use]
    pub fn no_cache() -> Self {
        Self {
            enabled: false,
            max_entries: 0,
        }
    }

    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }
}

impl Validator for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.enabled {
            if self.max_entries != 0 {
                return Err(ConfigurationError::Conflict(format!(
                    "disabled cache configured with max_entries = {}",
                    self.max_entries
                )));
            }
            return Ok(());
        }
        ConfigValidator::validate_capacity(self.max_entries, "max_entries")
    }
}
