//! Document conversion: obtain a pandoc AST, build its outline, render it.
//!
//! # Example
//!
//! ```no_run
//! use pandoc_opml::convert::{ConvertOptions, Converter};
//! use std::path::Path;
//!
//! fn main() -> pandoc_opml::Result<()> {
//!     let converter = Converter::new(ConvertOptions::default());
//!     let result = converter.convert_file(Path::new("notes.md"))?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod pandoc;

pub use pandoc::{PandocOptions, PandocSource};

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::model::{Document, Metadata};
use crate::outline::document_outline;
use crate::parser::JsonParser;
use crate::render::{render, OutputFormat, RenderOptions};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// How to run pandoc
    pub pandoc: PandocOptions,

    /// Treat input files as pandoc JSON instead of running pandoc
    pub json_input: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set pandoc options.
    pub fn with_pandoc(mut self, options: PandocOptions) -> Self {
        self.pandoc = options;
        self
    }

    /// Read input files as pandoc JSON.
    pub fn with_json_input(mut self, json_input: bool) -> Self {
        self.json_input = json_input;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.render.format = format;
        self
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Rendered content
    pub content: String,

    /// Source document metadata
    pub metadata: Metadata,

    /// Number of outline nodes rendered
    pub node_count: usize,

    /// Depth of the deepest outline node
    pub max_depth: usize,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Write the content to `path`, or to standard output when `None`.
    pub fn write_to(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                writer.write_all(self.content.as_bytes())?;
                writer.flush()?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                writer.write_all(self.content.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

/// A way of turning an input file into a pandoc document.
pub trait DocumentSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Load the document at `path`.
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Reads files that already contain pandoc JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl DocumentSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<Document> {
        crate::parse_file(path)
    }
}

/// Converts documents to rendered outlines.
pub struct Converter {
    options: ConvertOptions,
    source: Box<dyn DocumentSource>,
}

impl Converter {
    /// Create a converter; files are read through pandoc unless
    /// `json_input` is set.
    pub fn new(options: ConvertOptions) -> Self {
        let source: Box<dyn DocumentSource> = if options.json_input {
            Box::new(JsonSource)
        } else {
            Box::new(PandocSource::new(options.pandoc.clone()))
        };
        Self { options, source }
    }

    /// Create a converter that reads files through a custom source.
    pub fn with_source(options: ConvertOptions, source: Box<dyn DocumentSource>) -> Self {
        Self { options, source }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a file.
    pub fn convert_file(&self, path: &Path) -> Result<ConvertResult> {
        log::debug!("loading {} via {}", path.display(), self.source.name());
        let doc = self.source.load(path)?;
        self.convert_document(&doc)
    }

    /// Convert pandoc JSON text.
    pub fn convert_json(&self, json: &str) -> Result<ConvertResult> {
        let doc = JsonParser::from_str(json)?.parse()?;
        self.convert_document(&doc)
    }

    /// Convert pandoc JSON read from a reader (e.g. standard input).
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<ConvertResult> {
        let doc = JsonParser::from_reader(reader)?.parse()?;
        self.convert_document(&doc)
    }

    /// Build and render the outline of a parsed document.
    pub fn convert_document(&self, doc: &Document) -> Result<ConvertResult> {
        let metadata = doc.metadata();
        let outline = document_outline(doc);
        let content = render(&outline, &metadata, &self.options.render)?;

        Ok(ConvertResult {
            content,
            metadata,
            node_count: outline.total_nodes(),
            max_depth: outline.max_depth(),
            mime_type: mime_type(self.options.render.format),
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

fn mime_type(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Opml => "text/x-opml",
        OutputFormat::Text => "text/plain",
        OutputFormat::Json(_) => "application/json",
    }
}
