//! Rendering options and configuration.

use chrono::{DateTime, Utc};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Value written to the OPML `docs` head element.
pub const OPML_DOCS_URL: &str = "http://dev.opml.org/spec2.html";

/// Value written to the OPML `generator` head element.
pub const GENERATOR_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Output format for a rendered outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// OPML 2.0 document
    #[default]
    Opml,

    /// Indented plain text, one node per line
    Text,

    /// JSON structure
    Json(JsonFormat),
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Options for rendering an outline.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,

    /// Spaces per nesting level (`None` writes no inter-element whitespace)
    pub indent: Option<usize>,

    /// Write the "generated by" comment at the top of the OPML document
    pub include_comment: bool,

    /// Timestamp used for `dateModified` (current time when unset)
    pub generated_at: Option<DateTime<Utc>>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = Some(spaces);
        self
    }

    /// Write everything without inter-element whitespace.
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Enable or disable the "generated by" comment.
    pub fn with_comment(mut self, include: bool) -> Self {
        self.include_comment = include;
        self
    }

    /// Pin the modification timestamp, for reproducible output.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Get the timestamp to stamp the output with.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Opml,
            indent: Some(DEFAULT_INDENT),
            include_comment: true,
            generated_at: None,
        }
    }
}

/// Format a timestamp as an RFC-822 date in GMT.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pandoc_opml::render::rfc822;
///
/// let at = Utc.with_ymd_and_hms(2014, 3, 9, 17, 5, 0).unwrap();
/// assert_eq!(rfc822(&at), "Sun, 09 Mar 2014 17:05:00 GMT");
/// ```
pub fn rfc822(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
