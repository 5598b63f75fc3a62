//! Output formatters for CLI commands.
//!
//! Every report can be rendered as JSON, as plain text for scripts, or as
//! colorized JSON for terminals.

use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Line-oriented rendering used by [`OutputFormat::Text`].
///
/// Scripts consume this form, so it carries no decoration: generated names
/// come out one per line and can be piped straight into other tools.
pub trait PlainText {
    /// Renders the value without colors or JSON punctuation.
    fn plain_text(&self) -> String;
}

/// Formats a report according to the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use caf_naming_cli::cli::OutputFormat;
/// use caf_naming_cli::formatters::{PlainText, format_output};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Name {
///     result: String,
/// }
///
/// impl PlainText for Name {
///     fn plain_text(&self) -> String {
///         self.result.clone()
///     }
/// }
///
/// let name = Name { result: "rdmilogxyz".to_string() };
/// assert!(format_output(&name, OutputFormat::Json)?.contains("\"result\""));
/// assert_eq!(format_output(&name, OutputFormat::Text)?, "rdmilogxyz");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize + PlainText>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => Ok(data.plain_text()),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;
    use std::fmt::Write;

    /// Formats data as colorized, indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0)?;
        Ok(out)
    }

    fn write_value(out: &mut String, value: &Value, indent: usize) -> Result<()> {
        let pad = "  ".repeat(indent);
        let inner = "  ".repeat(indent + 1);

        match value {
            Value::Null => write!(out, "{}", "null".dimmed())?,
            Value::Bool(b) => write!(out, "{}", b.to_string().yellow())?,
            Value::Number(n) => write!(out, "{}", n.to_string().cyan())?,
            Value::String(s) => write!(out, "\"{}\"", s.green())?,
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&inner);
                    write_value(out, item, indent + 1)?;
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                write!(out, "{pad}]")?;
            }
            Value::Object(fields) if fields.is_empty() => out.push_str("{}"),
            Value::Object(fields) => {
                out.push_str("{\n");
                for (i, (key, field)) in fields.iter().enumerate() {
                    write!(out, "{inner}\"{}\": ", key.blue().bold())?;
                    write_value(out, field, indent + 1)?;
                    if i + 1 < fields.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                write!(out, "{pad}}}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        result: String,
        length: usize,
        exact: bool,
        tags: Vec<String>,
    }

    impl PlainText for TestData {
        fn plain_text(&self) -> String {
            self.result.clone()
        }
    }

    fn data() -> TestData {
        TestData {
            result: "rdmilog".to_string(),
            length: 7,
            exact: true,
            tags: vec!["st".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&data()).unwrap();
        assert!(output.contains("\"result\": \"rdmilog\""));
        assert!(output.contains("\"length\": 7"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_uses_plain_text() {
        let output = format_output(&data(), OutputFormat::Text).unwrap();
        assert_eq!(output, "rdmilog");
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = format_output(&data(), OutputFormat::Pretty).unwrap();
        assert!(output.starts_with("{\n"));
        assert!(output.contains("\"result\": \"rdmilog\","));
        assert!(output.contains("\"tags\": [\n    \"st\"\n  ]"));
        assert!(output.ends_with('}'));
    }

    #[test]
    fn test_pretty_format_empty_collections() {
        colored::control::set_override(false);
        assert_eq!(pretty::format(&Vec::<u8>::new()).unwrap(), "[]");
        assert_eq!(
            pretty::format(&serde_json::Map::new()).unwrap(),
            "{}"
        );
    }
}
