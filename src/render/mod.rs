//! Rendering module for converting outlines to output formats.

mod json;
mod opml;
mod options;
mod text;

pub use json::to_json;
pub use opml::{to_opml, write_opml, OpmlRenderer};
pub use options::{
    rfc822, JsonFormat, OutputFormat, RenderOptions, DEFAULT_INDENT, GENERATOR_URL,
    OPML_DOCS_URL,
};
pub use text::to_text;

use crate::error::Result;
use crate::model::{Metadata, Outline};

/// Render an outline in the format selected by `options`.
pub fn render(outline: &Outline, metadata: &Metadata, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Opml => to_opml(outline, metadata, options),
        OutputFormat::Text => to_text(outline, options),
        OutputFormat::Json(format) => to_json(outline, metadata, format),
    }
}
