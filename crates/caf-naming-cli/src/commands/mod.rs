//! Command implementations for the CAF naming CLI.
//!
//! Each command runs synchronously against a shared [`NamingEngine`], formats
//! its report with [`crate::formatters`] and returns the process exit code.

use crate::cli::ExitCode;
use caf_naming_core::{Error, NamingEngine};
use colored::Colorize;

pub mod completions;
pub mod generate;
pub mod resource_types;
pub mod validate;

/// Maps a library error to the exit code reported for it.
///
/// Problems with what the user typed are `INVALID_INPUT`; everything else,
/// including names that do not conform, is a general `ERROR`.
#[must_use]
pub const fn exit_code_for(err: &Error) -> ExitCode {
    if err.is_unknown_resource_type()
        || err.is_unknown_convention()
        || err.is_illegal_prefix_or_name()
        || err.is_config_error()
    {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}

/// Prints `err` to stderr and returns its exit code.
pub(crate) fn report_error(err: &Error) -> ExitCode {
    eprintln!("{} {err}", "error:".red().bold());
    exit_code_for(err)
}

/// Builds the engine every command runs against.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the overrides do not form a valid
/// configuration.
pub fn build_engine(
    max_attempts: Option<u32>,
    filler_length: Option<usize>,
) -> caf_naming_core::Result<NamingEngine> {
    let mut builder = caf_naming_core::EngineConfig::builder();
    if let Some(max_attempts) = max_attempts {
        builder = builder.max_attempts(max_attempts);
    }
    if let Some(filler_length) = filler_length {
        builder = builder.filler_length(filler_length);
    }
    let catalog = std::sync::Arc::new(caf_naming_core::Catalog::builtin()?);
    NamingEngine::new(catalog, builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_invalid_input() {
        let err = Error::UnknownResourceType {
            code: "zz".to_string(),
        };
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);

        let err = Error::UnknownConvention {
            name: "fancy".to_string(),
        };
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_generation_errors_map_to_error() {
        let err = Error::GenerationExhausted {
            resource_type: "st".to_string(),
            attempts: 8,
        };
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);

        let err = Error::NonConforming {
            resource_type: "st".to_string(),
            value: "a-b".to_string(),
        };
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }

    #[test]
    fn test_build_engine_applies_overrides() {
        let engine = build_engine(Some(3), Some(9)).unwrap();
        assert_eq!(engine.config().max_attempts, 3);
        assert_eq!(engine.config().filler_length, 9);

        let engine = build_engine(None, None).unwrap();
        assert_eq!(engine.config().max_attempts, caf_naming_core::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_build_engine_rejects_zero_attempts() {
        let err = build_engine(Some(0), None).unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }
}
