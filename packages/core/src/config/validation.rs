//! Configuration validation
//!
//! Common validation result type, error enum and capacity checks shared by
//! the configuration structs.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidCapacity` - if a size limit is outside its allowed range
    /// - `Conflict` - if configuration settings conflict with each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a cache capacity
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCapacity` if the capacity is below
    /// ten entries (eviction removes a tenth, so smaller caches never evict)
    /// or exceeds `ConfigDefaults::MAX_CACHE_ENTRIES`.
    pub fn validate_capacity(capacity: usize, name: &str) -> ConfigResult<()> {
        if capacity < ConfigDefaults::MIN_CACHE_ENTRIES {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} must hold at least {} entries, got {capacity}",
                ConfigDefaults::MIN_CACHE_ENTRIES
            )));
        }

        if capacity > ConfigDefaults::MAX_CACHE_ENTRIES {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} cannot exceed {} entries",
                ConfigDefaults::MAX_CACHE_ENTRIES
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_CACHE_ENTRIES: usize = 1000;
    pub const MIN_CACHE_ENTRIES: usize = 10;
    pub const MAX_CACHE_ENTRIES: usize = 1_000_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_limits() {
        assert!(ConfigValidator::validate_capacity(10, "max_entries").is_ok());
        assert!(matches!(
            ConfigValidator::validate_capacity(9, "max_entries"),
            Err(ConfigurationError::InvalidCapacity(_))
        ));
        assert!(ConfigValidator::validate_capacity(2_000_000, "max_entries").is_err());
    }
}
