//! Inline-level AST types.

use serde::{Deserialize, Serialize};

/// An inline element inside a block's text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// A run of literal text
    Str(String),

    /// Inter-word space
    Space,

    /// Emphasized text
    Emph(Vec<Inline>),

    /// Strongly emphasized text
    Strong(Vec<Inline>),

    /// Subscripted text
    Subscript(Vec<Inline>),

    /// Superscripted text
    Superscript(Vec<Inline>),

    /// Struck-out text
    Strikeout(Vec<Inline>),

    /// Hyperlink
    Link {
        /// Link text
        content: Vec<Inline>,
        /// Target URL
        url: String,
        /// Link title (empty when absent)
        title: String,
    },

    /// Inline code span (kept verbatim)
    Code(String),

    /// Any inline kind the outline has no rendering for.
    Unknown(String),
}

impl Inline {
    /// Create a text run.
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Str(s.into())
    }

    /// Create a link without a title.
    pub fn link(content: Vec<Inline>, url: impl Into<String>) -> Self {
        Inline::Link {
            content,
            url: url.into(),
            title: String::new(),
        }
    }

    /// Split a sentence into `Str`/`Space` runs.
    ///
    /// Handy for building documents by hand:
    ///
    /// ```
    /// use pandoc_opml::model::Inline;
    ///
    /// let inlines = Inline::words("hello world");
    /// assert_eq!(inlines.len(), 3);
    /// ```
    pub fn words(s: &str) -> Vec<Inline> {
        let mut out = Vec::new();
        for (i, word) in s.split_whitespace().enumerate() {
            if i > 0 {
                out.push(Inline::Space);
            }
            out.push(Inline::text(word));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let inlines = Inline::words("  one two   three ");
        assert_eq!(
            inlines,
            vec![
                Inline::text("one"),
                Inline::Space,
                Inline::text("two"),
                Inline::Space,
                Inline::text("three"),
            ]
        );
        assert!(Inline::words("").is_empty());
    }
}
