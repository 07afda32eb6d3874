//! Substitution errors.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_stack::DepthExceeded;

/// A substitution that could not be completed.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SubstError {
    /// Vals nested deeper than the configured limit.
    #[error("substitution exceeded the nesting limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl SubstError {
    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SubstError::DepthLimitExceeded { limit } => {
                Diagnostic::error(ErrorCode::E9001, self.to_string())
                    .with_note(format!(
                        "a generic specialization nests more than {limit} levels of values or witnesses"
                    ))
                    .with_help(format!(
                        "raise the limit with {}=<depth> if the nesting is intended",
                        crate::config::MAX_DEPTH_ENV
                    ))
            }
        }
    }
}

impl From<DepthExceeded> for SubstError {
    fn from(err: DepthExceeded) -> Self {
        SubstError::DepthLimitExceeded { limit: err.limit }
    }
}

#[cfg(test)]
mod tests;
