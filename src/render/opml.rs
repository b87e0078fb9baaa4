//! OPML rendering for outlines.

use std::io::Write;

use crate::error::Result;
use crate::model::{Metadata, Outline, OutlineNode};

use super::options::{rfc822, RenderOptions, GENERATOR_URL, OPML_DOCS_URL};

/// Render an outline as an OPML 2.0 document.
pub fn to_opml(outline: &Outline, metadata: &Metadata, options: &RenderOptions) -> Result<String> {
    let renderer = OpmlRenderer::new(options.clone());
    Ok(renderer.render(outline, metadata))
}

/// Render an outline as OPML into a writer, flushing it afterwards.
pub fn write_opml<W: Write>(
    outline: &Outline,
    metadata: &Metadata,
    options: &RenderOptions,
    mut writer: W,
) -> Result<()> {
    let opml = to_opml(outline, metadata, options)?;
    writer.write_all(opml.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// OPML renderer.
pub struct OpmlRenderer {
    options: RenderOptions,
}

impl OpmlRenderer {
    /// Create a new OPML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document head and body.
    pub fn render(&self, outline: &Outline, metadata: &Metadata) -> String {
        let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let now = rfc822(&self.options.timestamp());

        self.line(&mut output, 0, "<opml version=\"2.0\">");
        if self.options.include_comment {
            self.line(
                &mut output,
                1,
                &format!(
                    "<!-- OPML generated by pandoc-opml v{} on {} -->",
                    env!("CARGO_PKG_VERSION"),
                    now
                ),
            );
        }

        self.line(&mut output, 1, "<head>");
        let fields = [
            ("title", metadata.title.clone()),
            ("description", metadata.description.clone()),
            ("ownerName", metadata.owner_name()),
            ("ownerEmail", metadata.email.clone()),
            ("dateCreated", metadata.date.clone()),
            ("dateModified", Some(now)),
            ("generator", Some(GENERATOR_URL.to_string())),
            ("docs", Some(OPML_DOCS_URL.to_string())),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                let element = format!("<{name}>{}</{name}>", escape_text(&value));
                self.line(&mut output, 2, &element);
            }
        }
        self.line(&mut output, 1, "</head>");

        if outline.is_empty() {
            self.line(&mut output, 1, "<body/>");
        } else {
            self.line(&mut output, 1, "<body>");
            for node in &outline.roots {
                self.render_node(&mut output, node, 2);
            }
            self.line(&mut output, 1, "</body>");
        }

        self.line(&mut output, 0, "</opml>");
        output
    }

    fn render_node(&self, output: &mut String, node: &OutlineNode, depth: usize) {
        let mut element = format!("<outline text=\"{}\"", escape_attr(&node.text));
        for (key, value) in &node.attributes {
            if key == "text" || !is_xml_name(key) {
                log::warn!("dropping outline attribute '{}' on '{}'", key, node.text);
                continue;
            }
            element.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
        }

        if node.is_leaf() {
            element.push_str("/>");
            self.line(output, depth, &element);
        } else {
            element.push('>');
            self.line(output, depth, &element);
            for child in &node.children {
                self.render_node(output, child, depth + 1);
            }
            self.line(output, depth, "</outline>");
        }
    }

    fn line(&self, output: &mut String, depth: usize, content: &str) {
        match self.options.indent {
            Some(spaces) => {
                output.push_str(&" ".repeat(spaces * depth));
                output.push_str(content);
                output.push('\n');
            }
            None => output.push_str(content),
        }
    }
}

/// Escape element text, dropping characters XML 1.0 cannot carry.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value, keeping whitespace characters intact.
///
/// Characters XML 1.0 cannot carry, even as references, are dropped.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Check if a string can be used as an XML attribute name.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
