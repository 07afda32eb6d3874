use std::io;

/// A failed file system operation.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Nothing exists at the path.
    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    /// Something exists at the path but it is neither a regular file nor a
    /// directory.
    #[error("not a file or directory: {path}")]
    NotADirectoryOrFile { path: String },

    /// The operating system returned a path that is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    /// Any other I/O failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl IoError {
    /// Wrap an I/O error for `path`, keeping "not found" distinguishable.
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            IoError::NotFound {
                path: path.to_owned(),
            }
        } else {
            IoError::Io {
                path: path.to_owned(),
                source,
            }
        }
    }

    /// Check if the error means nothing exists at the path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IoError::NotFound { .. })
    }
}
