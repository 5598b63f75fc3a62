//! Validate command implementation.
//!
//! Checks an existing name against a resource type's pattern.

use super::report_error;
use crate::cli::{ExitCode, OutputFormat};
use crate::formatters::{PlainText, format_output};
use anyhow::{Context, Result};
use caf_naming_core::NamingEngine;
use serde::Serialize;

/// Outcome of checking one name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Resource type code checked against
    pub resource_type: String,
    /// The checked name
    pub value: String,
    /// Whether the name conforms
    pub valid: bool,
    /// Why the name does not conform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PlainText for ValidationReport {
    fn plain_text(&self) -> String {
        let verdict = if self.valid { "valid" } else { "invalid" };
        format!("{}\t{verdict}", self.value)
    }
}

/// Checks `value` against `resource_type`.
///
/// A non-conforming name is a report, not an error.
///
/// # Errors
///
/// Returns [`caf_naming_core::Error::UnknownResourceType`] if the code is
/// not in the catalog.
pub fn check(
    engine: &NamingEngine,
    resource_type: &str,
    value: &str,
) -> caf_naming_core::Result<ValidationReport> {
    let (valid, reason) = match engine.validate(resource_type, value) {
        Ok(()) => (true, None),
        Err(err) if err.is_non_conforming() => (false, Some(err.to_string())),
        Err(err) => return Err(err),
    };

    Ok(ValidationReport {
        resource_type: resource_type.to_string(),
        value: value.to_string(),
        valid,
        reason,
    })
}

/// Runs the validate command.
///
/// Exits with [`ExitCode::ERROR`] when the name does not conform.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(
    engine: &NamingEngine,
    resource_type: &str,
    value: &str,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let report = match check(engine, resource_type, value) {
        Ok(report) => report,
        Err(err) => return Ok(report_error(&err)),
    };

    let formatted =
        format_output(&report, output_format).context("failed to format validation result")?;
    println!("{formatted}");

    if report.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::ERROR)
    }
}
