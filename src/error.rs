//! Error types for the inline_sass pipeline
//!
//! Fail-fast conditions (bad input, failed Sass compilation, filesystem
//! errors) surface as `InlineSassError`. A failed inline stage is not an
//! error; it is reported as `InlineOutcome::Degraded`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for inline_sass operations
pub type Result<T> = std::result::Result<T, InlineSassError>;

/// Error types for inline_sass operations
#[derive(Debug, Error)]
pub enum InlineSassError {
    /// The input named an HTML file whose contents could not be parsed
    #[error("file \"{}\" unparseable", .path.display())]
    UnparseableFile { path: PathBuf },

    /// The literal input text is not an HTML document
    #[error("\"{}\" not HTML", excerpt(.input))]
    NotHtml { input: String },

    /// A linked Sass stylesheet failed to compile (missing file or syntax error)
    #[error("failed to compile \"{}\": {message}", .path.display())]
    Compile { path: PathBuf, message: String },

    /// Filesystem error on a specific path
    #[error("I/O error on \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document tree could not be queried or serialized back to HTML
    #[error("document error: {0}")]
    Document(String),

    /// Options could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl InlineSassError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InlineSassError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the offending file, when the error is tied to one
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            InlineSassError::UnparseableFile { path }
            | InlineSassError::Compile { path, .. }
            | InlineSassError::Io { path, .. } => Some(path),
            InlineSassError::NotHtml { .. }
            | InlineSassError::Document(_)
            | InlineSassError::Config(_) => None,
        }
    }
}

/// Literal inputs longer than this are cut in messages
const EXCERPT_CHARS: usize = 80;

fn excerpt(input: &str) -> String {
    match input.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

impl From<serde_json::Error> for InlineSassError {
    fn from(error: serde_json::Error) -> Self {
        InlineSassError::Config(error.to_string())
    }
}
