use std::fmt;

/// Error codes for semantic-layer diagnostics.
///
/// Format: E#### where the first digit indicates the phase; E9xxx are
/// internal compiler errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Substitution recursion limit exceeded
    E9001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E9001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
