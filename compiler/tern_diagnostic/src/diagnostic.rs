use std::fmt;

use crate::ErrorCode;

/// How serious a diagnostic is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up line attached below the headline.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TrailerKind {
    /// Context explaining the failure.
    Note,
    /// A way past the failure.
    Help,
}

impl TrailerKind {
    fn label(self) -> &'static str {
        match self {
            TrailerKind::Note => "note",
            TrailerKind::Help => "help",
        }
    }
}

/// A failure report produced by the semantic layer.
///
/// Rendering is one headline (`error [E9001]: message`) followed by the
/// trailers in the order they were added.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    trailers: Vec<(TrailerKind, String)>,
}

impl Diagnostic {
    /// An error with the given headline.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            trailers: Vec::new(),
        }
    }

    pub fn with_note(self, note: impl Into<String>) -> Self {
        self.with_trailer(TrailerKind::Note, note.into())
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        self.with_trailer(TrailerKind::Help, help.into())
    }

    fn with_trailer(mut self, kind: TrailerKind, text: String) -> Self {
        self.trailers.push((kind, text));
        self
    }

    /// Trailers of one kind, in insertion order.
    pub fn trailers(&self, kind: TrailerKind) -> impl Iterator<Item = &str> + '_ {
        self.trailers
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        for (kind, text) in &self.trailers {
            write!(f, "\n  = {}: {text}", kind.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
