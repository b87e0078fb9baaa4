//! Block-level AST types.

use super::Inline;
use serde::{Deserialize, Serialize};

/// Identifier, classes and key/value pairs attached to a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Element identifier (empty when absent)
    pub identifier: String,

    /// Classes
    pub classes: Vec<String>,

    /// Key/value pairs, in source order
    pub attributes: Vec<(String, String)>,
}

/// A block-level element of the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Text without paragraph semantics (tight list items)
    Plain(Vec<Inline>),

    /// A paragraph
    Para(Vec<Inline>),

    /// A section heading
    Header {
        /// Heading level, 1-based
        level: usize,
        /// Heading attributes
        attr: Attr,
        /// Heading text
        content: Vec<Inline>,
    },

    /// Unordered list; each item is a sequence of blocks
    BulletList(Vec<Vec<Block>>),

    /// Ordered list
    OrderedList {
        /// Number of the first item
        start: i64,
        /// List items
        items: Vec<Vec<Block>>,
    },

    /// Any block kind the outline ignores.
    Unknown(String),
}

impl Block {
    /// Create a paragraph from a sentence.
    pub fn para(text: &str) -> Self {
        Block::Para(Inline::words(text))
    }

    /// Create a plain block from a sentence.
    pub fn plain(text: &str) -> Self {
        Block::Plain(Inline::words(text))
    }

    /// Create a heading with empty attributes.
    pub fn header(level: usize, text: &str) -> Self {
        Block::Header {
            level,
            attr: Attr::default(),
            content: Inline::words(text),
        }
    }

    /// Get the AST tag name of this block.
    pub fn tag(&self) -> &str {
        match self {
            Block::Plain(_) => "Plain",
            Block::Para(_) => "Para",
            Block::Header { .. } => "Header",
            Block::BulletList(_) => "BulletList",
            Block::OrderedList { .. } => "OrderedList",
            Block::Unknown(tag) => tag,
        }
    }
}
