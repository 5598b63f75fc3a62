//! Constraint-compliant Azure resource name generation.
//!
//! Given a convention, a resource type code, a base name and an optional
//! prefix, the engine produces one name that fits the type's maximum length,
//! starts with the sanitized prefix, keeps the base name when there is room,
//! and matches the type's validation pattern exactly once.
//!
//! # Architecture
//!
//! - [`Catalog`]: immutable table of per-type rules, built once and shared
//! - [`compose`]: type-aware sanitization and segment assembly
//! - [`truncate`]: fits the candidate to the length budget
//! - [`validate`]: full-string pattern check
//! - [`NamingEngine`]: the bounded compose/validate loop
//!
//! The crate performs no I/O. It emits `tracing` events at debug level and
//! leaves subscriber setup to the host.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod composer;
mod config;
mod engine;
mod error;
mod random;
mod truncator;
mod types;
mod validator;

pub use catalog::{Catalog, ResourceTypeRule, RuleDefinition, builtin_definitions};
pub use composer::{Candidate, compose};
pub use config::{DEFAULT_FILLER_LENGTH, DEFAULT_MAX_ATTEMPTS, EngineConfig, EngineConfigBuilder};
pub use engine::NamingEngine;
pub use error::{Error, Result};
pub use random::{Alphabet, RandomTokenGenerator, TokenSource};
pub use truncator::truncate;
pub use types::{Convention, NameId, NamingRequest, NamingResult};
pub use validator::validate;
