//! pandoc JSON parsing module.

mod ast;
mod json_parser;

pub use ast::{read_block, read_blocks, read_inline, read_inlines, read_meta, read_meta_value};
pub use json_parser::JsonParser;
