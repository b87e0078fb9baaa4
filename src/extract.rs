//! Inline text extraction.
//!
//! Flattens inline AST nodes into a single string in which literal text is
//! entity-escaped and formatting is expressed as inline HTML tags.

use crate::model::Inline;

/// Flatten a sequence of inline nodes into escaped display text.
///
/// Unknown inline kinds produce no output.
///
/// ```
/// use pandoc_opml::extract::extract;
/// use pandoc_opml::model::Inline;
///
/// let inlines = vec![
///     Inline::text("Fish"),
///     Inline::Space,
///     Inline::Emph(vec![Inline::text("&")]),
///     Inline::Space,
///     Inline::text("chips"),
/// ];
/// assert_eq!(extract(&inlines), "Fish <em>&amp;</em> chips");
/// ```
pub fn extract(inlines: &[Inline]) -> String {
    let mut out = String::new();
    extract_into(&mut out, inlines);
    out
}

fn extract_into(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Str(text) => out.push_str(&escape(text)),
            Inline::Space => out.push(' '),
            Inline::Link {
                content,
                url,
                title,
            } => {
                out.push_str("<a href=\"");
                out.push_str(url);
                if !title.is_empty() {
                    out.push_str("\" title=\"");
                    out.push_str(title);
                }
                out.push_str("\">");
                extract_into(out, content);
                out.push_str("</a>");
            }
            Inline::Emph(content) => wrap(out, "em", content),
            Inline::Strong(content) => wrap(out, "strong", content),
            Inline::Subscript(content) => wrap(out, "sub", content),
            Inline::Superscript(content) => wrap(out, "sup", content),
            Inline::Strikeout(content) => wrap(out, "del", content),
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(code);
                out.push_str("</code>");
            }
            Inline::Unknown(_) => {}
        }
    }
}

fn wrap(out: &mut String, tag: &str, content: &[Inline]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    extract_into(out, content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape the five reserved markup characters.
///
/// Every character is replaced in a single pass, so the ampersands of the
/// inserted entities are never escaped again.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_space() {
        let inlines = Inline::words("hello brave world");
        assert_eq!(extract(&inlines), "hello brave world");
    }

    #[test]
    fn test_escape_all_reserved() {
        assert_eq!(
            escape(r#""Tom" & 'Jerry' <3 >"#),
            "&quot;Tom&quot; &amp; &apos;Jerry&apos; &lt;3 &gt;"
        );
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        assert_eq!(escape("\"&"), "&quot;&amp;");
        assert_eq!(escape("&quot;"), "&amp;quot;");
    }

    #[test]
    fn test_escape_expansion_length() {
        let inlines = vec![Inline::text("a<b"), Inline::Space, Inline::text("c&d")];
        let out = extract(&inlines);
        // '<' grows by three bytes, '&' by four
        assert_eq!(out.len(), 3 + 1 + 3 + 3 + 4);
        assert_eq!(out, "a&lt;b c&amp;d");
    }

    #[test]
    fn test_link_with_and_without_title() {
        let plain = Inline::link(Inline::words("the site"), "https://example.com");
        assert_eq!(
            extract(&[plain]),
            "<a href=\"https://example.com\">the site</a>"
        );

        let titled = Inline::Link {
            content: vec![Inline::text("x")],
            url: "/x".into(),
            title: "Ex".into(),
        };
        assert_eq!(extract(&[titled]), "<a href=\"/x\" title=\"Ex\">x</a>");
    }

    #[test]
    fn test_nested_formatting() {
        let inlines = vec![Inline::Strong(vec![
            Inline::text("bold"),
            Inline::Space,
            Inline::Emph(vec![Inline::Strikeout(vec![Inline::text("gone")])]),
        ])];
        assert_eq!(
            extract(&inlines),
            "<strong>bold <em><del>gone</del></em></strong>"
        );

        let scripts = vec![
            Inline::text("H"),
            Inline::Subscript(vec![Inline::text("2")]),
            Inline::text("O"),
            Inline::Superscript(vec![Inline::text("n")]),
        ];
        assert_eq!(extract(&scripts), "H<sub>2</sub>O<sup>n</sup>");
    }

    #[test]
    fn test_code_is_verbatim() {
        let inlines = vec![Inline::Code("a < b && c".into())];
        assert_eq!(extract(&inlines), "<code>a < b && c</code>");
    }

    #[test]
    fn test_unknown_inline_skipped() {
        let inlines = vec![
            Inline::text("before"),
            Inline::Unknown("Math".into()),
            Inline::text("after"),
        ];
        assert_eq!(extract(&inlines), "beforeafter");
    }
}
