//! Outline building module.

mod builder;

pub use builder::{BuildState, LastBlock, NodeId, OutlineBuilder};

use crate::model::{Block, Document, Outline};

/// Build an outline from body blocks.
pub fn build_outline(blocks: &[Block]) -> Outline {
    OutlineBuilder::new().build(blocks)
}

/// Build the outline of a whole document.
pub fn document_outline(doc: &Document) -> Outline {
    build_outline(&doc.blocks)
}
