//! Request → result orchestration.
//!
//! One request moves through `compose → truncate → validate`. A
//! non-conforming candidate sends a randomized request back to composition
//! with a fresh draw, at most [`EngineConfig::max_attempts`] times in total;
//! deterministic conventions get a single attempt. Running out of attempts
//! is reported as [`Error::GenerationExhausted`].
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::{Catalog, EngineConfig, NamingEngine, NamingRequest};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let engine = NamingEngine::new(catalog, EngineConfig::default())?;
//!
//! let request = NamingRequest::new("st", "log").with_prefix("rdmi-");
//! let name = engine.generate(&request)?;
//! assert_eq!(name.value.len(), 24);
//! assert!(name.value.starts_with("rdmilog"));
//! # Ok::<(), caf_naming_core::Error>(())
//! ```

use crate::catalog::Catalog;
use crate::composer::compose;
use crate::random::{RandomTokenGenerator, TokenSource};
use crate::truncator::truncate;
use crate::validator::validate;
use crate::{EngineConfig, Error, NameId, NamingRequest, NamingResult, Result};
use std::sync::Arc;

/// Name generator bound to a catalog and a configuration.
///
/// Cheap to clone; clones share the catalog.
#[derive(Debug, Clone)]
pub struct NamingEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
}

impl NamingEngine {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `config` does not validate.
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Creates an engine over the built-in catalog with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if the built-in table is malformed.
    pub fn with_builtin_catalog() -> Result<Self> {
        Self::new(Arc::new(Catalog::builtin()?), EngineConfig::default())
    }

    /// The catalog this engine resolves resource types against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates a name using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`NamingEngine::generate_with`].
    pub fn generate(&self, request: &NamingRequest) -> Result<NamingResult> {
        self.generate_with(request, &mut RandomTokenGenerator::from_entropy())
    }

    /// Generates a name drawing filler from `tokens`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownResourceType`] if the code is not in the catalog
    /// - [`Error::IllegalPrefixOrName`] if sanitized inputs cannot fit
    /// - [`Error::GenerationExhausted`] if no attempt produced a conforming name
    pub fn generate_with(
        &self,
        request: &NamingRequest,
        tokens: &mut impl TokenSource,
    ) -> Result<NamingResult> {
        let rule = self.catalog.lookup(&request.resource_type)?;
        let convention = request.convention;
        let attempts = if convention.is_randomized() {
            self.config.max_attempts
        } else {
            1
        };

        for attempt in 1..=attempts {
            let candidate = compose(rule, request, self.config.filler_length, tokens)?;
            let value = truncate(candidate, rule, convention.is_length_exact(), tokens);

            match validate(&value, rule) {
                Ok(()) => {
                    return Ok(NamingResult {
                        value,
                        id: NameId::new(),
                        resource_type: rule.code().to_string(),
                        convention,
                    });
                }
                Err(err) => {
                    tracing::debug!("Attempt {}/{} rejected: {}", attempt, attempts, err);
                }
            }
        }

        tracing::debug!(
            "Giving up on {} after {} attempt(s)",
            request.resource_type,
            attempts
        );
        Err(Error::GenerationExhausted {
            resource_type: rule.code().to_string(),
            attempts,
        })
    }

    /// Checks an existing name against a resource type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResourceType`] or [`Error::NonConforming`].
    pub fn validate(&self, resource_type: &str, value: &str) -> Result<()> {
        validate(value, self.catalog.lookup(resource_type)?)
    }
}
