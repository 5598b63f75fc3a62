//! Engine configuration.
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::{Convention, EngineConfig};
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.max_attempts, 8);
//!
//! let custom = EngineConfig::builder()
//!     .max_attempts(3)
//!     .filler_length(8)
//!     .default_convention(Convention::Random)
//!     .build();
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Convention, Error, Result};
use serde::{Deserialize, Serialize};

/// Default retry ceiling for randomized conventions.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Default number of filler characters drawn before truncation.
pub const DEFAULT_FILLER_LENGTH: usize = 5;

/// Tunables of the naming engine.
///
/// Deserializable with defaults for every missing field, so hosts can embed
/// it in their own configuration format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of compose/validate rounds for randomized conventions.
    ///
    /// Must be at least 1. Default: 8
    pub max_attempts: u32,

    /// Nominal filler length drawn by the composer.
    ///
    /// The truncator shrinks or extends the filler afterwards, so for
    /// length-exact conventions this only affects how much is drawn up front.
    /// Default: 5
    pub filler_length: usize,

    /// Convention used by hosts when the caller does not pick one.
    ///
    /// Default: `cafrandom`
    pub default_convention: Convention,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            filler_length: DEFAULT_FILLER_LENGTH,
            default_convention: Convention::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `max_attempts` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::ConfigError {
                message: "max_attempts must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Creates a builder seeded with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the retry ceiling.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    /// Sets the nominal filler length.
    #[must_use]
    pub const fn filler_length(mut self, length: usize) -> Self {
        self.config.filler_length = length;
        self
    }

    /// Sets the default convention.
    #[must_use]
    pub const fn default_convention(mut self, convention: Convention) -> Self {
        self.config.default_convention = convention;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> EngineConfig {
        self.config
    }
}
