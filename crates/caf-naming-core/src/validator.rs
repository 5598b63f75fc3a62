//! Final conformance check.
//!
//! A value conforms when the validation pattern of its resource type finds
//! exactly one match and that match spans the whole value. Patterns describe
//! the whole legal name space, so a partial or repeated match is a failure.

use crate::catalog::ResourceTypeRule;
use crate::{Error, Result};

/// Checks `value` against the rule's validation pattern.
///
/// # Errors
///
/// Returns [`Error::NonConforming`] if the pattern does not match exactly
/// once across the entire string.
///
/// # Examples
///
/// ```
/// use caf_naming_core::{Catalog, validate};
///
/// let catalog = Catalog::builtin()?;
/// let rule = catalog.lookup("st")?;
/// assert!(validate("rdmilog0123", rule).is_ok());
/// assert!(validate("rdmi-log", rule).is_err());
/// # Ok::<(), caf_naming_core::Error>(())
/// ```
pub fn validate(value: &str, rule: &ResourceTypeRule) -> Result<()> {
    let mut matches = rule.validation_pattern().find_iter(value);
    let conforms = match (matches.next(), matches.next()) {
        (Some(only), None) => only.start() == 0 && only.end() == value.len(),
        _ => false,
    };

    if conforms {
        Ok(())
    } else {
        Err(Error::NonConforming {
            resource_type: rule.code().to_string(),
            value: value.to_string(),
        })
    }
}
