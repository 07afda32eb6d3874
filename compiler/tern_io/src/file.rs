//! Whole-file reads and writes.

use std::fs;
use std::path::Path;

use crate::IoError;

/// Check if anything exists at `path`.
pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Read a UTF-8 text file.
pub fn read_all_text(path: &str) -> Result<String, IoError> {
    tracing::trace!(path, "reading text file");
    fs::read_to_string(path).map_err(|err| IoError::from_io(path, err))
}

/// Read a file as raw bytes.
pub fn read_all_bytes(path: &str) -> Result<Vec<u8>, IoError> {
    tracing::trace!(path, "reading binary file");
    fs::read(path).map_err(|err| IoError::from_io(path, err))
}

/// Create or truncate `path` and write `text` to it.
pub fn write_all_text(path: &str, text: &str) -> Result<(), IoError> {
    tracing::trace!(path, bytes = text.len(), "writing text file");
    fs::write(path, text).map_err(|err| IoError::from_io(path, err))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
