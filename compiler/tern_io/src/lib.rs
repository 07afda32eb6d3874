//! File and path utilities for the Tern compiler.
//!
//! Paths are handled as strings. Both `/` and `\` are accepted as delimiters
//! on input; paths built here always use `/`.

mod error;
pub mod file;
pub mod path;

pub use error::IoError;
pub use path::PathType;
