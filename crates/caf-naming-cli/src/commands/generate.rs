//! Generate command implementation.
//!
//! Produces one or more names for a resource type and prints them.

use super::report_error;
use crate::cli::{ExitCode, OutputFormat};
use crate::formatters::{PlainText, format_output};
use anyhow::{Context, Result};
use caf_naming_core::{Convention, NamingEngine, NamingRequest, NamingResult};
use serde::Serialize;
use tracing::debug;

/// Names generated by one invocation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateReport {
    /// Resource type code the names were generated for
    pub resource_type: String,
    /// Convention used
    pub convention: Convention,
    /// Generated names in order
    pub names: Vec<NamingResult>,
}

impl PlainText for GenerateReport {
    fn plain_text(&self) -> String {
        self.names
            .iter()
            .map(NamingResult::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolves the convention argument, falling back to the engine default.
///
/// # Errors
///
/// Returns [`caf_naming_core::Error::UnknownConvention`] for unknown names.
pub fn resolve_convention(
    engine: &NamingEngine,
    convention: Option<&str>,
) -> caf_naming_core::Result<Convention> {
    convention.map_or(Ok(engine.config().default_convention), str::parse)
}

/// Generates `count` names for the same request.
///
/// Each name is drawn independently, so randomized conventions give
/// distinct values while deterministic ones repeat the same value.
///
/// # Errors
///
/// Returns the first generation error; no partial report is produced.
pub fn generate_names(
    engine: &NamingEngine,
    request: &NamingRequest,
    count: u32,
) -> caf_naming_core::Result<GenerateReport> {
    let names = (0..count)
        .map(|_| engine.generate(request))
        .collect::<caf_naming_core::Result<Vec<_>>>()?;

    Ok(GenerateReport {
        resource_type: request.resource_type.clone(),
        convention: request.convention,
        names,
    })
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error only if output formatting fails; naming failures are
/// printed and turned into an exit code.
pub fn run(
    engine: &NamingEngine,
    resource_type: String,
    name: String,
    prefix: String,
    convention: Option<&str>,
    count: u32,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    debug!(
        "Generating {} name(s) for {} (name: '{}', prefix: '{}')",
        count, resource_type, name, prefix
    );

    let convention = match resolve_convention(engine, convention) {
        Ok(convention) => convention,
        Err(err) => return Ok(report_error(&err)),
    };
    let request = NamingRequest::new(resource_type, name)
        .with_prefix(prefix)
        .with_convention(convention);

    let report = match generate_names(engine, &request, count) {
        Ok(report) => report,
        Err(err) => return Ok(report_error(&err)),
    };

    let formatted =
        format_output(&report, output_format).context("failed to format generated names")?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}
