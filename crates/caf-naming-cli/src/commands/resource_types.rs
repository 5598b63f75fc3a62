//! Resource-types command implementation.
//!
//! Lists the catalog so users can discover the supported codes.

use crate::cli::{ExitCode, OutputFormat};
use crate::formatters::{PlainText, format_output};
use anyhow::{Context, Result};
use caf_naming_core::{Catalog, ResourceTypeRule};
use serde::Serialize;

/// One catalog row as shown to the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResourceTypeEntry {
    /// Resource type code
    pub code: String,
    /// Human description
    pub resource_name: String,
    /// CAF abbreviation
    pub slug: String,
    /// Minimum name length
    pub min_length: usize,
    /// Maximum name length
    pub max_length: usize,
    /// Whether names must be lower case
    pub lowercase: bool,
    /// Whether dashes are tolerated
    pub dashes: bool,
}

impl From<&ResourceTypeRule> for ResourceTypeEntry {
    fn from(rule: &ResourceTypeRule) -> Self {
        Self {
            code: rule.code().to_string(),
            resource_name: rule.resource_name().to_string(),
            slug: rule.slug().to_string(),
            min_length: rule.min_length(),
            max_length: rule.max_length(),
            lowercase: rule.lowercase(),
            dashes: rule.dashes(),
        }
    }
}

/// Catalog listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResourceTypeList {
    /// Entries sorted by code
    pub resource_types: Vec<ResourceTypeEntry>,
}

impl PlainText for ResourceTypeList {
    fn plain_text(&self) -> String {
        self.resource_types
            .iter()
            .map(|e| {
                format!(
                    "{}\t{}..{}\t{}",
                    e.code, e.min_length, e.max_length, e.resource_name
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Collects the catalog rows in code order.
#[must_use]
pub fn list(catalog: &Catalog) -> ResourceTypeList {
    ResourceTypeList {
        resource_types: catalog.iter().map(ResourceTypeEntry::from).collect(),
    }
}

/// Runs the resource-types command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(catalog: &Catalog, output_format: OutputFormat) -> Result<ExitCode> {
    let listing = list(catalog);
    let formatted =
        format_output(&listing, output_format).context("failed to format resource types")?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}
