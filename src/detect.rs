//! pandoc JSON shape detection.

use crate::error::{Error, Result};
use serde_json::Value;

/// Top-level layout of a pandoc JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstFormat {
    /// `[meta, blocks]`, written by pandoc before 1.18
    Legacy,
    /// `{"pandoc-api-version": [...], "meta": {...}, "blocks": [...]}`
    Current {
        /// Declared API version (e.g. `[1, 23, 1]`)
        api_version: Vec<u64>,
    },
}

impl std::fmt::Display for AstFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AstFormat::Legacy => write!(f, "pandoc JSON (legacy)"),
            AstFormat::Current { api_version } => {
                let parts: Vec<String> = api_version.iter().map(u64::to_string).collect();
                write!(f, "pandoc JSON API {}", parts.join("."))
            }
        }
    }
}

/// Detect the document layout of a parsed JSON value.
///
/// # Returns
/// * `Ok(AstFormat)` if the value is shaped like a pandoc document
/// * `Err(Error::InvalidAst)` otherwise
///
/// # Example
/// ```
/// use pandoc_opml::detect::{detect_format, AstFormat};
/// use serde_json::json;
///
/// let value = json!([{"unMeta": {}}, []]);
/// assert_eq!(detect_format(&value).unwrap(), AstFormat::Legacy);
/// ```
pub fn detect_format(value: &Value) -> Result<AstFormat> {
    match value {
        Value::Array(parts) => match parts.as_slice() {
            [meta, blocks] if meta.is_object() && blocks.is_array() => Ok(AstFormat::Legacy),
            _ => Err(Error::InvalidAst(
                "expected a two-element [meta, blocks] array".to_string(),
            )),
        },
        Value::Object(map) => {
            if !map.get("blocks").is_some_and(Value::is_array) {
                return Err(Error::InvalidAst(
                    "document object has no \"blocks\" array".to_string(),
                ));
            }
            let api_version = map
                .get("pandoc-api-version")
                .and_then(Value::as_array)
                .map(|parts| parts.iter().filter_map(Value::as_u64).collect())
                .unwrap_or_default();
            Ok(AstFormat::Current { api_version })
        }
        _ => Err(Error::InvalidAst(
            "expected a JSON array or object at the top level".to_string(),
        )),
    }
}
