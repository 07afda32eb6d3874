use super::*;
use pretty_assertions::assert_eq;
use tern_diagnostic::{Severity, TrailerKind};

#[test]
fn depth_exceeded_converts() {
    let err = SubstError::from(DepthExceeded { limit: 12 });
    assert_eq!(err, SubstError::DepthLimitExceeded { limit: 12 });
    assert_eq!(err.to_string(), "substitution exceeded the nesting limit of 12");
}

#[test]
fn diagnostic_is_internal_error() {
    let diag = SubstError::DepthLimitExceeded { limit: 256 }.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "substitution exceeded the nesting limit of 256");
    assert_eq!(diag.trailers(TrailerKind::Note).count(), 1);
    let help: Vec<_> = diag.trailers(TrailerKind::Help).collect();
    assert_eq!(help.len(), 1);
    assert!(help[0].contains("TERN_SUBST_MAX_DEPTH"));
}
