//! Plain text rendering for outlines.

use crate::error::Result;
use crate::model::{Outline, OutlineNode};

use super::options::{RenderOptions, DEFAULT_INDENT};

/// Render an outline as indented text, one node per line.
pub fn to_text(outline: &Outline, options: &RenderOptions) -> Result<String> {
    let indent = options.indent.unwrap_or(DEFAULT_INDENT);
    let mut output = String::new();
    for node in &outline.roots {
        render_node(&mut output, node, 0, indent);
    }
    Ok(output)
}

fn render_node(output: &mut String, node: &OutlineNode, depth: usize, indent: usize) {
    output.push_str(&" ".repeat(depth * indent));
    output.push_str(&node.text);
    output.push('\n');
    for child in &node.children {
        render_node(output, child, depth + 1, indent);
    }
}
