use super::*;
use pretty_assertions::assert_eq;

#[test]
fn trailers_are_filtered_by_kind() {
    let diag = Diagnostic::error(ErrorCode::E9001, "substitution too deep")
        .with_note("while specializing `example`")
        .with_help("check for a cyclic conformance chain")
        .with_note("limit is 4");

    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(
        diag.trailers(TrailerKind::Note).collect::<Vec<_>>(),
        vec!["while specializing `example`", "limit is 4"]
    );
    assert_eq!(diag.trailers(TrailerKind::Help).count(), 1);
}

#[test]
fn display_keeps_insertion_order() {
    let diag = Diagnostic::error(ErrorCode::E9001, "substitution too deep")
        .with_help("raise the limit")
        .with_note("limit is 4");

    assert_eq!(
        diag.to_string(),
        "error [E9001]: substitution too deep\n  = help: raise the limit\n  = note: limit is 4"
    );
}
