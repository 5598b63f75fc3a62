//! Request and result types for name generation.
//!
//! Requests and results are request-scoped values: the engine never mutates
//! a request and never keeps a result after returning it.
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::{Convention, NamingRequest};
//!
//! let request = NamingRequest::new("st", "log").with_prefix("rdmi-");
//! assert_eq!(request.convention, Convention::CafRandom);
//! assert_eq!(request.prefix, "rdmi-");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque handle for a generated name (newtype over a v4 UUID).
///
/// Distinct from the generated name itself; hosts use it as the external id
/// of the naming resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(Uuid);

impl NameId {
    /// Creates a new random identifier.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composition strategy for a name.
///
/// # Examples
///
/// ```
/// use caf_naming_core::Convention;
///
/// let convention: Convention = "CafRandom".parse()?;
/// assert_eq!(convention, Convention::CafRandom);
/// assert!(convention.is_length_exact());
/// assert!(!Convention::Passthrough.is_randomized());
/// # Ok::<(), caf_naming_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Prefix, name, then random filler up to exactly the maximum length.
    #[default]
    CafRandom,
    /// Prefix followed by random filler up to exactly the maximum length.
    Random,
    /// Prefix, CAF slug and name joined by the type's separator.
    CafClassic,
    /// Sanitized name only, trimmed to the maximum length.
    Passthrough,
}

impl Convention {
    /// All conventions, in display order.
    pub const ALL: [Self; 4] = [
        Self::CafRandom,
        Self::Random,
        Self::CafClassic,
        Self::Passthrough,
    ];

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CafRandom => "cafrandom",
            Self::Random => "random",
            Self::CafClassic => "cafclassic",
            Self::Passthrough => "passthrough",
        }
    }

    /// Whether the output must be exactly the maximum length.
    #[must_use]
    pub const fn is_length_exact(&self) -> bool {
        matches!(self, Self::CafRandom | Self::Random)
    }

    /// Whether the convention draws random filler.
    ///
    /// Only randomized conventions are retried on a non-conforming
    /// candidate; a deterministic one would produce the same string again.
    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        matches!(self, Self::CafRandom | Self::Random)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::UnknownConvention {
                name: s.to_string(),
            })
    }
}

/// One name generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRequest {
    /// Composition strategy
    #[serde(default)]
    pub convention: Convention,
    /// Catalog key of the target resource type
    pub resource_type: String,
    /// Free-form base name
    #[serde(default)]
    pub name: String,
    /// Optional prefix; may contain characters that get sanitized away
    #[serde(default)]
    pub prefix: String,
}

impl NamingRequest {
    /// Creates a `cafrandom` request without prefix.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            convention: Convention::default(),
            resource_type: resource_type.into(),
            name: name.into(),
            prefix: String::new(),
        }
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the convention.
    #[must_use]
    pub const fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }
}

/// Output of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingResult {
    /// The generated name
    #[serde(rename = "result")]
    pub value: String,
    /// Stable handle distinct from the name
    pub id: NameId,
    /// Resource type the name was generated for
    pub resource_type: String,
    /// Convention that produced the name
    pub convention: Convention,
}

impl NamingResult {
    /// Returns the generated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NamingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
