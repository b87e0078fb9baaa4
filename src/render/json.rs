//! JSON rendering for outlines.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Metadata, Outline, OutlineNode};

use super::JsonFormat;

#[derive(Serialize)]
struct JsonOutline<'a> {
    metadata: &'a Metadata,
    roots: &'a [OutlineNode],
}

/// Convert an outline and its metadata to JSON.
pub fn to_json(outline: &Outline, metadata: &Metadata, format: JsonFormat) -> Result<String> {
    let value = JsonOutline {
        metadata,
        roots: &outline.roots,
    };
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&value),
        JsonFormat::Compact => serde_json::to_string(&value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
