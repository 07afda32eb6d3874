//! Diagnostic system for reporting semantic-layer failures.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message (what went wrong)
//! - notes (why it went wrong)
//! - help lines (how to get past it)
//!
//! Diagnostics are plain values. Producers return them; the driver decides
//! where they are rendered.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity, TrailerKind};
pub use error_code::ErrorCode;
