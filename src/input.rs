//! Loading source text
//!
//! Sources are read in full before any processing starts.

use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Label used in messages for text read from standard input
pub const STDIN_LABEL: &str = "<stdin>";

/// Read a UTF-8 text file
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    decode(bytes, &path.display().to_string())
}

/// Read all of `reader` as UTF-8 text
///
/// `label` names the source in decode errors.
pub fn read_text<R: Read>(mut reader: R, label: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    debug!(source = label, bytes = bytes.len(), "read input stream");

    decode(bytes, label)
}

/// Reject text that is empty once surrounding whitespace is trimmed
pub fn ensure_content(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(())
}

fn decode(bytes: Vec<u8>, label: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::InputDecode(label.to_string()))
}
