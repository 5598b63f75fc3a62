//! Resource type catalog.
//!
//! Maps short resource-type codes (`st`, `kv`, `rg`, ...) to the naming rule
//! of that type. The catalog is compiled once from a table of
//! [`RuleDefinition`] rows and is read-only afterwards; share it between
//! engines and threads through an `Arc`.
//!
//! Everything type-specific lives in the row: length bounds, which
//! characters are stripped, which characters may start or end a name, case
//! folding and dash tolerance. Adding a resource type means adding a row.
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! let storage = catalog.lookup("st")?;
//! assert_eq!(storage.max_length(), 24);
//! assert!(storage.lowercase());
//! assert_eq!(storage.sanitize("rdmi-Log_01"), "rdmilog01");
//! # Ok::<(), caf_naming_core::Error>(())
//! ```

use crate::random::Alphabet;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Uncompiled naming rule, as authored in a catalog table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique short code, e.g. `st`
    pub code: String,
    /// Human readable resource type
    pub resource_name: String,
    /// CAF abbreviation used by the classic convention
    #[serde(default)]
    pub slug: String,
    /// Minimum legal name length
    pub min_length: usize,
    /// Maximum legal name length
    pub max_length: usize,
    /// Fold names to lower case
    #[serde(default)]
    pub lowercase: bool,
    /// `-` may be used as a separator
    #[serde(default)]
    pub dashes: bool,
    /// Pattern matching characters that sanitization removes
    pub invalid_chars: String,
    /// Character class a name may start with, e.g. `[a-zA-Z]`
    pub leading: String,
    /// Character class a name may end with
    pub trailing: String,
    /// Pattern every legal full name matches
    pub validation_pattern: String,
}

/// Compiled naming rule of one resource type.
#[derive(Debug, Clone)]
pub struct ResourceTypeRule {
    code: String,
    resource_name: String,
    slug: String,
    min_length: usize,
    max_length: usize,
    lowercase: bool,
    dashes: bool,
    invalid_chars: Regex,
    leading: Regex,
    trailing: Regex,
    validation: Regex,
    filler: Alphabet,
    leading_filler: Alphabet,
    trailing_filler: Alphabet,
    edge_filler: Alphabet,
}

impl ResourceTypeRule {
    /// Compiles a definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if a pattern does not compile, the
    /// length bounds are inconsistent, or no alphanumeric filler character
    /// is legal for the type.
    pub fn compile(definition: &RuleDefinition) -> Result<Self> {
        let code = definition.code.as_str();
        let invalid = |reason: String| Error::InvalidCatalog {
            code: code.to_string(),
            reason,
        };

        if code.trim().is_empty() {
            return Err(invalid("code cannot be empty".to_string()));
        }
        if definition.min_length == 0 || definition.max_length < definition.min_length {
            return Err(invalid(format!(
                "length bounds {}..={} are inconsistent",
                definition.min_length, definition.max_length
            )));
        }

        let compile = |field: &str, pattern: &str| {
            Regex::new(pattern).map_err(|e| invalid(format!("{field} pattern: {e}")))
        };
        let invalid_chars = compile("invalid_chars", &definition.invalid_chars)?;
        let leading = compile("leading", &format!("^(?:{})$", definition.leading))?;
        let trailing = compile("trailing", &format!("^(?:{})$", definition.trailing))?;
        let validation = compile("validation", &definition.validation_pattern)?;

        let base = if definition.lowercase {
            Alphabet::lowercase_alphanumeric()
        } else {
            Alphabet::alphanumeric()
        };
        let filler = base
            .filter(|c| !matches_char(&invalid_chars, c))
            .ok_or_else(|| invalid("no alphanumeric character is legal".to_string()))?;
        let leading_filler = filler
            .filter(|c| matches_char(&leading, c))
            .ok_or_else(|| invalid("no filler character may lead a name".to_string()))?;
        let trailing_filler = filler
            .filter(|c| matches_char(&trailing, c))
            .ok_or_else(|| invalid("no filler character may end a name".to_string()))?;
        let edge_filler = leading_filler
            .filter(|c| matches_char(&trailing, c))
            .ok_or_else(|| invalid("no filler character may both lead and end a name".to_string()))?;

        Ok(Self {
            code: definition.code.clone(),
            resource_name: definition.resource_name.clone(),
            slug: definition.slug.clone(),
            min_length: definition.min_length,
            max_length: definition.max_length,
            lowercase: definition.lowercase,
            dashes: definition.dashes,
            invalid_chars,
            leading,
            trailing,
            validation,
            filler,
            leading_filler,
            trailing_filler,
            edge_filler,
        })
    }

    /// Resource type code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable resource type.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// CAF abbreviation.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Minimum legal length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum legal length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether names are folded to lower case.
    #[must_use]
    pub const fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether `-` separators are tolerated.
    #[must_use]
    pub const fn dashes(&self) -> bool {
        self.dashes
    }

    /// Separator used when joining segments.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        if self.dashes { "-" } else { "" }
    }

    /// Compiled validation pattern.
    #[must_use]
    pub const fn validation_pattern(&self) -> &Regex {
        &self.validation
    }

    /// Alphabet for filler in the middle of a name.
    #[must_use]
    pub const fn filler_alphabet(&self) -> &Alphabet {
        &self.filler
    }

    /// Alphabet for a filler character that starts the name.
    #[must_use]
    pub const fn leading_alphabet(&self) -> &Alphabet {
        &self.leading_filler
    }

    /// Alphabet for a filler character that ends the name.
    #[must_use]
    pub const fn trailing_alphabet(&self) -> &Alphabet {
        &self.trailing_filler
    }

    /// Alphabet for a one-character name.
    #[must_use]
    pub const fn edge_alphabet(&self) -> &Alphabet {
        &self.edge_filler
    }

    /// Whether `c` may start a name.
    #[must_use]
    pub fn accepts_leading(&self, c: char) -> bool {
        matches_char(&self.leading, c)
    }

    /// Whether `c` may end a name.
    #[must_use]
    pub fn accepts_trailing(&self, c: char) -> bool {
        matches_char(&self.trailing, c)
    }

    /// Removes characters illegal for this type and applies case folding.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        let cleaned = self.invalid_chars.replace_all(text, "");
        if self.lowercase {
            cleaned.to_lowercase()
        } else {
            cleaned.into_owned()
        }
    }

    /// Drops leading characters that may not start a name.
    #[must_use]
    pub fn strip_leading<'a>(&self, text: &'a str) -> &'a str {
        text.trim_start_matches(|c: char| !self.accepts_leading(c))
    }

    /// Drops trailing characters that may not end a name.
    #[must_use]
    pub fn strip_trailing<'a>(&self, text: &'a str) -> &'a str {
        text.trim_end_matches(|c: char| !self.accepts_trailing(c))
    }
}

fn matches_char(pattern: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    pattern.is_match(c.encode_utf8(&mut buf))
}

/// Immutable lookup from resource-type code to rule.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: BTreeMap<String, ResourceTypeRule>,
}

impl Catalog {
    /// Compiles the built-in Azure resource table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if a built-in row is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_definitions(builtin_definitions())
    }

    /// Compiles a catalog from arbitrary rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] on a malformed row or a duplicate
    /// code.
    pub fn from_definitions(definitions: impl IntoIterator<Item = RuleDefinition>) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for definition in definitions {
            let rule = ResourceTypeRule::compile(&definition)?;
            if rules.insert(definition.code.clone(), rule).is_some() {
                return Err(Error::InvalidCatalog {
                    code: definition.code,
                    reason: "duplicate code".to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Looks up the rule for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResourceType`] if the code is not present.
    pub fn lookup(&self, code: &str) -> Result<&ResourceTypeRule> {
        self.rules
            .get(code)
            .ok_or_else(|| Error::UnknownResourceType {
                code: code.to_string(),
            })
    }

    /// Returns `true` if `code` is in the catalog.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    /// Number of resource types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over rules ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceTypeRule> {
        self.rules.values()
    }
}

// Characters stripped by sanitization.
const ALPHANUM: &str = "[^0-9A-Za-z]";
const ALPHANUM_H: &str = "[^0-9A-Za-z-]";
const ALPHANUM_HU: &str = "[^0-9A-Za-z_-]";
const ALPHANUM_HUP: &str = "[^0-9A-Za-z_.-]";
const RESOURCE_GROUP: &str = "[^0-9A-Za-z_.()-]";

// Edge character classes.
const LETTER: &str = "[a-zA-Z]";
const ALNUM: &str = "[a-zA-Z0-9]";
const ALNUM_U: &str = "[a-zA-Z0-9_]";
const LOWER_ALNUM: &str = "[a-z0-9]";

type Row = (
    &'static str,
    &'static str,
    &'static str,
    usize,
    usize,
    bool,
    bool,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

// code, resource, slug, min, max, lowercase, dashes, invalid, leading, trailing, validation
#[rustfmt::skip]
const BUILTIN: &[Row] = &[
    ("aaa", "automation account", "aa", 6, 50, false, true, ALPHANUM_H, LETTER, ALNUM, r"^[a-zA-Z][a-zA-Z0-9-]{4,48}[a-zA-Z0-9]$"),
    ("acr", "container registry", "cr", 5, 50, true, false, ALPHANUM, LOWER_ALNUM, LOWER_ALNUM, r"^[a-zA-Z0-9]{5,50}$"),
    ("afw", "firewall", "afw", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("agw", "application gateway", "agw", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("aks", "kubernetes cluster", "aks", 1, 63, false, true, ALPHANUM_HU, ALNUM, ALNUM, r"^[a-zA-Z0-9]([a-zA-Z0-9_-]{0,61}[a-zA-Z0-9])?$"),
    ("asr", "recovery services vault", "rsv", 2, 50, false, true, ALPHANUM_H, LETTER, "[a-zA-Z0-9-]", r"^[a-zA-Z][a-zA-Z0-9-]{1,49}$"),
    ("evh", "event hub namespace", "evh", 6, 50, false, true, ALPHANUM_H, LETTER, ALNUM, r"^[a-zA-Z][a-zA-Z0-9-]{4,48}[a-zA-Z0-9]$"),
    ("kv", "key vault", "kv", 3, 24, false, true, ALPHANUM_H, LETTER, ALNUM, r"^[a-zA-Z][a-zA-Z0-9-]{1,22}[a-zA-Z0-9]$"),
    ("la", "log analytics workspace", "log", 4, 63, false, true, ALPHANUM_H, ALNUM, ALNUM, r"^[a-zA-Z0-9][a-zA-Z0-9-]{2,61}[a-zA-Z0-9]$"),
    ("nic", "network interface", "nic", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("nsg", "network security group", "nsg", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("pip", "public ip address", "pip", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("rg", "resource group", "rg", 1, 90, false, true, RESOURCE_GROUP, "[a-zA-Z0-9_.()-]", "[a-zA-Z0-9_()-]", r"^[a-zA-Z0-9_.()-]{0,89}[a-zA-Z0-9_()-]$"),
    ("snet", "virtual network subnet", "snet", 1, 80, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9]([a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_])?$"),
    ("sql", "sql server", "sql", 1, 63, true, true, ALPHANUM_H, LOWER_ALNUM, LOWER_ALNUM, r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$"),
    ("st", "storage account", "st", 3, 24, true, false, ALPHANUM, LOWER_ALNUM, LOWER_ALNUM, r"^[a-z0-9]{3,24}$"),
    ("vml", "virtual machine (linux)", "vm", 1, 64, false, true, ALPHANUM_H, LETTER, ALNUM, r"^[a-zA-Z]([a-zA-Z0-9-]{0,62}[a-zA-Z0-9])?$"),
    ("vmw", "virtual machine (windows)", "vm", 1, 15, false, true, ALPHANUM_H, LETTER, ALNUM, r"^[a-zA-Z]([a-zA-Z0-9-]{0,13}[a-zA-Z0-9])?$"),
    ("vnet", "virtual network", "vnet", 2, 64, false, true, ALPHANUM_HUP, ALNUM, ALNUM_U, r"^[a-zA-Z0-9][a-zA-Z0-9_.-]{0,62}[a-zA-Z0-9_]$"),
];

/// Rows of the built-in catalog.
#[must_use]
pub fn builtin_definitions() -> Vec<RuleDefinition> {
    BUILTIN
        .iter()
        .map(
            |&(code, resource, slug, min, max, lowercase, dashes, invalid, leading, trailing, validation)| {
                RuleDefinition {
                    code: code.to_string(),
                    resource_name: resource.to_string(),
                    slug: slug.to_string(),
                    min_length: min,
                    max_length: max,
                    lowercase,
                    dashes,
                    invalid_chars: invalid.to_string(),
                    leading: leading.to_string(),
                    trailing: trailing.to_string(),
                    validation_pattern: validation.to_string(),
                }
            },
        )
        .collect()
}
