//! Error types for pandoc-opml library.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for pandoc-opml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document to an outline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing the outline.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document is not shaped like a pandoc AST.
    #[error("Invalid pandoc AST: {0}")]
    InvalidAst(String),

    /// The pandoc executable could not be started.
    #[error("pandoc executable not found: {0}")]
    PandocNotFound(String),

    /// pandoc ran but exited unsuccessfully.
    #[error("pandoc failed ({status}): {stderr}")]
    Pandoc {
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured standard error output
        stderr: String,
    },

    /// Error during rendering (OPML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
