//! # pandoc-opml
//!
//! Convert documents into OPML outlines.
//!
//! pandoc parses the source document into its JSON AST; this library turns
//! headings, paragraphs and (nested) lists of that AST into a tree of
//! outline nodes and writes the tree as OPML 2.0, indented text or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use pandoc_opml::{build_outline, parse_json};
//!
//! fn main() -> pandoc_opml::Result<()> {
//!     let doc = parse_json(r#"{"blocks": [
//!         {"t": "Header", "c": [1, ["", [], []], [{"t": "Str", "c": "Todo"}]]},
//!         {"t": "BulletList", "c": [
//!             [{"t": "Plain", "c": [{"t": "Str", "c": "write"}]}],
//!             [{"t": "Plain", "c": [{"t": "Str", "c": "test"}]}]
//!         ]}
//!     ]}"#)?;
//!
//!     let outline = build_outline(&doc.blocks);
//!     assert_eq!(outline.roots[0].children.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Both pandoc JSON layouts**: the legacy `[meta, blocks]` array and the
//!   current `pandoc-api-version` object
//! - **Structure from headings and lists**: headings re-anchor the depth,
//!   nested lists indent further, list kind and ordinals become attributes
//! - **Inline markup**: emphasis, links and code spans kept as inline HTML
//! - **Best effort**: unknown nodes are skipped, never fatal

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, Converter, DocumentSource, JsonSource, PandocOptions,
    PandocSource,
};
pub use detect::{detect_format, AstFormat};
pub use error::{Error, Result};
pub use model::{Attr, Block, Document, Inline, MetaValue, Metadata, Outline, OutlineNode};
pub use outline::{build_outline, OutlineBuilder};
pub use parser::JsonParser;
pub use render::{JsonFormat, OutputFormat, RenderOptions};

use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse pandoc JSON text into a document.
///
/// # Example
///
/// ```
/// use pandoc_opml::parse_json;
///
/// let doc = parse_json(r#"[{"unMeta": {}}, []]"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    JsonParser::from_str(json)?.parse()
}

/// Parse a file containing pandoc JSON.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    JsonParser::open(path)?.parse()
}

/// Parse pandoc JSON from a reader.
///
/// # Example
///
/// ```no_run
/// use pandoc_opml::parse_reader;
///
/// let doc = parse_reader(std::io::stdin().lock()).unwrap();
/// println!("{} blocks", doc.blocks.len());
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    JsonParser::from_reader(reader)?.parse()
}

/// Convert pandoc JSON text to OPML.
///
/// # Example
///
/// ```
/// use pandoc_opml::to_opml;
///
/// let opml = to_opml(r#"{"blocks": [{"t": "Para", "c": [{"t": "Str", "c": "hi"}]}]}"#)?;
/// assert!(opml.contains("<outline text=\"hi\"/>"));
/// # Ok::<(), pandoc_opml::Error>(())
/// ```
pub fn to_opml(json: &str) -> Result<String> {
    Ok(Converter::default().convert_json(json)?.content)
}

/// Convert pandoc JSON text to an indented text outline.
pub fn to_text(json: &str) -> Result<String> {
    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    Ok(Converter::new(options).convert_json(json)?.content)
}

/// Convert a document file to OPML by running pandoc on it.
///
/// # Example
///
/// ```no_run
/// use pandoc_opml::convert_file;
///
/// let opml = convert_file("notes.org").unwrap();
/// std::fs::write("notes.opml", opml).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(Converter::default().convert_file(path.as_ref())?.content)
}

/// Builder for converting documents to outlines.
///
/// # Example
///
/// ```no_run
/// use pandoc_opml::PandocOpml;
///
/// let text = PandocOpml::new()
///     .from_format("org")
///     .text()
///     .convert_file("notes.org")?;
/// # Ok::<(), pandoc_opml::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PandocOpml {
    options: ConvertOptions,
}

impl PandocOpml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render OPML (the default).
    pub fn opml(mut self) -> Self {
        self.options.render.format = OutputFormat::Opml;
        self
    }

    /// Render an indented text outline.
    pub fn text(mut self) -> Self {
        self.options.render.format = OutputFormat::Text;
        self
    }

    /// Render JSON.
    pub fn json(mut self, format: JsonFormat) -> Self {
        self.options.render.format = OutputFormat::Json(format);
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.options.render = self.options.render.with_indent(spaces);
        self
    }

    /// Write OPML without inter-element whitespace.
    pub fn compact(mut self) -> Self {
        self.options.render = self.options.render.compact();
        self
    }

    /// Pin the OPML modification timestamp.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.options.render = self.options.render.with_timestamp(at);
        self
    }

    /// Omit the "generated by" comment.
    pub fn without_comment(mut self) -> Self {
        self.options.render = self.options.render.with_comment(false);
        self
    }

    /// Set the pandoc input format.
    pub fn from_format(mut self, format: impl Into<String>) -> Self {
        self.options.pandoc = self.options.pandoc.with_from(format);
        self
    }

    /// Set the pandoc program.
    pub fn with_pandoc(mut self, program: impl Into<PathBuf>) -> Self {
        self.options.pandoc = self.options.pandoc.with_program(program);
        self
    }

    /// Treat input files as pandoc JSON.
    pub fn json_input(mut self) -> Self {
        self.options.json_input = true;
        self
    }

    /// Get the accumulated conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a file.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<String> {
        Ok(Converter::new(self.options)
            .convert_file(path.as_ref())?
            .content)
    }

    /// Convert pandoc JSON text.
    pub fn convert_json(self, json: &str) -> Result<String> {
        Ok(Converter::new(self.options).convert_json(json)?.content)
    }
}
