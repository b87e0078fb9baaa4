//! Outline tree types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A labeled node of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Escaped display text
    pub text: String,

    /// Attributes such as `level`, `list` or `ordinal`
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a new node without attributes or children.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: OutlineNode) {
        self.children.push(child);
    }

    /// Check if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A forest of outline nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Top-level nodes
    pub roots: Vec<OutlineNode>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Get the total number of nodes (including nested).
    pub fn total_nodes(&self) -> usize {
        fn count(nodes: &[OutlineNode]) -> usize {
            nodes.iter().map(|node| 1 + count(&node.children)).sum()
        }
        count(&self.roots)
    }

    /// Get the number of levels in the deepest branch (0 when empty).
    pub fn max_depth(&self) -> usize {
        fn depth(nodes: &[OutlineNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + depth(&node.children))
                .max()
                .unwrap_or(0)
        }
        depth(&self.roots)
    }
}
