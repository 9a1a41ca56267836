//! Integration tests for Error types
//!
//! Tests error construction, display, context, and integrity issues.

use schemata_foundation::{
    Alias, CstId, Error, ErrorContext, ErrorKind, IntegrityIssue,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_alias() {
    let err = Error::invalid_alias("q7");
    assert!(matches!(err.kind, ErrorKind::InvalidAlias(_)));
    assert!(format!("{err}").contains("q7"));
}

#[test]
fn error_unknown_constituent() {
    let err = Error::unknown_constituent("D9");
    assert!(matches!(err.kind, ErrorKind::UnknownConstituent(_)));
    assert_eq!(format!("{err}"), "unknown constituent: D9");
}

#[test]
fn error_integrity_lists_every_issue() {
    let err = Error::integrity(vec![
        IntegrityIssue::DuplicateId {
            id: CstId::new(4),
            first: 0,
            duplicate: 2,
        },
        IntegrityIssue::DuplicateAlias {
            alias: Alias::new_unchecked("X1"),
            first: 1,
            duplicate: 3,
        },
    ]);
    let ErrorKind::Integrity(issues) = &err.kind else {
        panic!("expected integrity error");
    };
    assert_eq!(issues.len(), 2);
    assert_eq!(
        format!("{err}"),
        "schema integrity violated: duplicate id 4 at position 2 (first at 0); \
         duplicate alias X1 at position 3 (first at 1)"
    );
}

#[test]
fn error_io_and_serialization() {
    let err = Error::new(ErrorKind::IoError("disk on fire".to_string()));
    assert!(format!("{err}").starts_with("I/O error"));
    let err = Error::new(ErrorKind::SerializationError("bad json".to_string()));
    assert!(format!("{err}").contains("bad json"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_renders_source_alias_and_frames() {
    let context = ErrorContext::new()
        .with_source("schema 7")
        .with_alias("D3")
        .with_frame("build_lookup")
        .with_frame("load");
    let rendered = context.to_string();
    assert!(rendered.starts_with("in schema 7 at D3"));
    assert!(rendered.contains("  in build_lookup\n"));
    assert!(rendered.contains("  in load\n"));

    let err = Error::unknown_constituent("D3").with_context(context);
    assert_eq!(err.context.unwrap().stack.len(), 2);
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::invalid_alias("?"));
}
