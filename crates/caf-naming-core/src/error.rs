//! Error types for resource name generation.
//!
//! Every failure of the engine is terminal: either a fully conforming name is
//! produced or one of these errors is returned, never a partial result.
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::{Catalog, Error};
//!
//! let catalog = Catalog::builtin()?;
//! let err = catalog.lookup("nope").unwrap_err();
//! assert!(err.is_unknown_resource_type());
//! # Ok::<(), Error>(())
//! ```

use thiserror::Error;

/// Main error type for the naming engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested resource type code is not in the catalog.
    #[error("Unknown resource type: {code}")]
    UnknownResourceType {
        /// Code that was looked up
        code: String,
    },

    /// The requested naming convention does not exist.
    #[error("Unknown naming convention: '{name}' (expected: cafrandom, random, cafclassic, passthrough)")]
    UnknownConvention {
        /// Convention name as supplied by the caller
        name: String,
    },

    /// Prefix or name cannot form any legal candidate after sanitization.
    ///
    /// Raised before composition, e.g. when the sanitized prefix alone is
    /// longer than the maximum length of the resource type.
    #[error("Illegal prefix or name for resource type '{resource_type}': {reason}")]
    IllegalPrefixOrName {
        /// Resource type code the request targeted
        resource_type: String,
        /// Why no candidate can be formed
        reason: String,
    },

    /// A value does not match the validation pattern of its resource type.
    #[error("Name '{value}' does not conform to resource type '{resource_type}'")]
    NonConforming {
        /// Resource type code whose pattern was checked
        resource_type: String,
        /// The rejected value
        value: String,
    },

    /// The bounded retry loop ran out of attempts.
    ///
    /// This points at a catalog authoring defect (pattern and maximum length
    /// that cannot be satisfied together) rather than a transient condition.
    #[error("Name generation exhausted after {attempts} attempt(s) for resource type '{resource_type}'")]
    GenerationExhausted {
        /// Resource type code the request targeted
        resource_type: String,
        /// Number of attempts made
        attempts: u32,
    },

    /// A catalog definition is malformed.
    #[error("Invalid catalog entry '{code}': {reason}")]
    InvalidCatalog {
        /// Code of the offending definition
        code: String,
        /// Description of the defect
        reason: String,
    },

    /// Engine configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if the resource type code was not found.
    #[must_use]
    pub const fn is_unknown_resource_type(&self) -> bool {
        matches!(self, Self::UnknownResourceType { .. })
    }

    /// Returns `true` if the convention name was not recognized.
    #[must_use]
    pub const fn is_unknown_convention(&self) -> bool {
        matches!(self, Self::UnknownConvention { .. })
    }

    /// Returns `true` if the prefix or name could not be used.
    #[must_use]
    pub const fn is_illegal_prefix_or_name(&self) -> bool {
        matches!(self, Self::IllegalPrefixOrName { .. })
    }

    /// Returns `true` if a value failed pattern validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use caf_naming_core::Error;
    ///
    /// let err = Error::NonConforming {
    ///     resource_type: "st".to_string(),
    ///     value: "Not-Valid".to_string(),
    /// };
    /// assert!(err.is_non_conforming());
    /// assert!(!err.is_exhausted());
    /// ```
    #[must_use]
    pub const fn is_non_conforming(&self) -> bool {
        matches!(self, Self::NonConforming { .. })
    }

    /// Returns `true` if generation gave up after the retry ceiling.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::GenerationExhausted { .. })
    }

    /// Returns `true` if a catalog definition was rejected.
    #[must_use]
    pub const fn is_invalid_catalog(&self) -> bool {
        matches!(self, Self::InvalidCatalog { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, Error>;
