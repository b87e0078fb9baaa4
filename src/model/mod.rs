//! Document model types.
//!
//! This module defines the typed pandoc AST that the reader produces and the
//! outline tree that the builder produces from it.

mod block;
mod document;
mod inline;
mod outline;

pub use block::{Attr, Block};
pub use document::{Document, MetaValue, Metadata};
pub use inline::Inline;
pub use outline::{Outline, OutlineNode};
