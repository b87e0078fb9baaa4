//! Document-level types.

use super::{Block, Inline};
use crate::extract::{escape, extract};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed pandoc document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// pandoc API version, when the input declared one
    pub api_version: Option<Vec<u64>>,

    /// Document metadata block
    pub meta: BTreeMap<String, MetaValue>,

    /// Body blocks in document order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metadata value.
    pub fn set_meta(&mut self, key: impl Into<String>, value: MetaValue) {
        self.meta.insert(key.into(), value);
    }

    /// Check if the document has no body blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Extract the outline head fields from the metadata block.
    pub fn metadata(&self) -> Metadata {
        Metadata::from_meta(&self.meta)
    }
}

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    /// Inline content
    Inlines(Vec<Inline>),

    /// Block content
    Blocks(Vec<Block>),

    /// A list of values
    List(Vec<MetaValue>),

    /// A nested map
    Map(BTreeMap<String, MetaValue>),

    /// A raw string
    String(String),

    /// A boolean flag
    Bool(bool),

    /// Any value kind without a textual form.
    Unknown(String),
}

impl MetaValue {
    /// Inline metadata from a sentence.
    pub fn inlines(text: &str) -> Self {
        MetaValue::Inlines(Inline::words(text))
    }

    /// Flatten this value into escaped display text.
    ///
    /// Lists are joined with `", "`, block content with a single space.
    /// Booleans, maps and unknown values have no text.
    pub fn to_text(&self) -> Option<String> {
        match self {
            MetaValue::Inlines(inlines) => Some(extract(inlines)),
            MetaValue::String(s) => Some(escape(s)),
            MetaValue::Blocks(blocks) => {
                let parts: Vec<String> = blocks
                    .iter()
                    .filter_map(|block| match block {
                        Block::Para(inlines) | Block::Plain(inlines) => Some(extract(inlines)),
                        _ => None,
                    })
                    .collect();
                Some(parts.join(" "))
            }
            MetaValue::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(MetaValue::to_text).collect();
                Some(parts.join(", "))
            }
            MetaValue::Map(_) | MetaValue::Bool(_) | MetaValue::Unknown(_) => None,
        }
    }
}

/// Outline head fields extracted from the document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document description
    pub description: Option<String>,

    /// Document authors
    pub authors: Vec<String>,

    /// Owner contact email
    pub email: Option<String>,

    /// Creation date, as written in the source
    pub date: Option<String>,
}

impl Metadata {
    /// Read the head fields out of a metadata map.
    pub fn from_meta(meta: &BTreeMap<String, MetaValue>) -> Self {
        let text = |key: &str| meta.get(key).and_then(MetaValue::to_text);

        let authors = match meta.get("author") {
            Some(MetaValue::List(items)) => items.iter().filter_map(MetaValue::to_text).collect(),
            Some(value) => value.to_text().into_iter().collect(),
            None => Vec::new(),
        };

        Self {
            title: text("title"),
            description: text("description"),
            authors,
            email: text("email"),
            date: text("date"),
        }
    }

    /// All authors joined into one display string.
    pub fn owner_name(&self) -> Option<String> {
        if self.authors.is_empty() {
            None
        } else {
            Some(self.authors.join(", "))
        }
    }
}
