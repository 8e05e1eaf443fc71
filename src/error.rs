//! Error types for the booklet library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the booklet library
#[derive(Error, Debug)]
pub enum Error {
    /// Source file does not exist
    #[error("File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    /// Source bytes are not valid UTF-8
    #[error("Unable to read '{0}' as UTF-8 text.")]
    InputDecode(String),

    /// Input is empty once surrounding whitespace is trimmed
    #[error("No content provided.")]
    EmptyContent,

    /// Processing finished without producing a single page
    #[error("No pages generated.")]
    NoPagesProduced,

    /// Rendered document could not be written
    #[error("Cannot write '{}': {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page width or height is unusable
    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
