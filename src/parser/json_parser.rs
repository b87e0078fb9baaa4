//! pandoc JSON document parser.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::detect::{detect_format, AstFormat};
use crate::error::Result;
use crate::model::Document;

use super::ast::{read_blocks, read_meta};

/// Parser for pandoc's JSON output.
pub struct JsonParser {
    value: Value,
    format: AstFormat,
}

impl JsonParser {
    /// Open a JSON AST file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse JSON text.
    pub fn from_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(data)?)
    }

    /// Parse JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Wrap an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let format = detect_format(&value)?;
        log::debug!("detected {}", format);
        Ok(Self { value, format })
    }

    /// Get the detected top-level layout.
    pub fn format(&self) -> &AstFormat {
        &self.format
    }

    /// Read the document into the typed model.
    pub fn parse(&self) -> Result<Document> {
        let empty = Map::new();

        let (meta, blocks, api_version) = match (&self.format, &self.value) {
            (AstFormat::Legacy, Value::Array(parts)) => {
                let meta = parts.first().and_then(Value::as_object).unwrap_or(&empty);
                // Older pandoc wraps the metadata map in "unMeta".
                let meta = meta
                    .get("unMeta")
                    .and_then(Value::as_object)
                    .unwrap_or(meta);
                (meta, parts.get(1), None)
            }
            (AstFormat::Current { api_version }, Value::Object(map)) => {
                let meta = map.get("meta").and_then(Value::as_object).unwrap_or(&empty);
                (meta, map.get("blocks"), Some(api_version.clone()))
            }
            _ => (&empty, None, None),
        };

        let document = Document {
            api_version,
            meta: read_meta(meta),
            blocks: blocks.map(read_blocks).unwrap_or_default(),
        };

        log::debug!(
            "parsed {} metadata fields and {} blocks",
            document.meta.len(),
            document.blocks.len()
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, MetaValue};

    #[test]
    fn test_parse_legacy_document() {
        let json = r#"[
            {"unMeta": {"title": {"t": "MetaInlines", "c": [{"t": "Str", "c": "Notes"}]}}},
            [{"t": "Para", "c": [{"t": "Str", "c": "Hello"}]}]
        ]"#;

        let parser = JsonParser::from_str(json).unwrap();
        assert_eq!(parser.format(), &AstFormat::Legacy);

        let doc = parser.parse().unwrap();
        assert!(doc.api_version.is_none());
        assert_eq!(doc.meta["title"], MetaValue::inlines("Notes"));
        assert_eq!(doc.blocks, vec![Block::para("Hello")]);
    }

    #[test]
    fn test_parse_unwrapped_legacy_meta() {
        let json = r#"[{"date": {"t": "MetaString", "c": "2014"}}, []]"#;
        let doc = JsonParser::from_str(json).unwrap().parse().unwrap();
        assert_eq!(doc.meta["date"], MetaValue::String("2014".into()));
    }

    #[test]
    fn test_parse_current_document() {
        let json = r#"{
            "pandoc-api-version": [1, 23],
            "meta": {},
            "blocks": [{"t": "Header", "c": [1, ["", [], []], [{"t": "Str", "c": "Top"}]]}]
        }"#;

        let doc = JsonParser::from_bytes(json.as_bytes())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(doc.api_version, Some(vec![1, 23]));
        assert_eq!(doc.blocks, vec![Block::header(1, "Top")]);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            JsonParser::from_str("# not json"),
            Err(crate::Error::Json(_))
        ));
    }
}
