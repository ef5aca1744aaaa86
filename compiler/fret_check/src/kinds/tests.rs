#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use fret_diagnostic::{Session, Severity};
use pretty_assertions::assert_eq;

#[test]
fn test_hint_counts_characters() {
    assert_eq!(
        TrailingWhitespace { count: 1 }.hint().as_deref(),
        Some("remove the trailing character")
    );
    assert_eq!(
        TrailingWhitespace { count: 3 }.hint().as_deref(),
        Some("remove the 3 trailing characters")
    );
}

#[test]
fn test_reported_like_a_builtin_kind() {
    let mut session = Session::new();
    session.worry(TrailingWhitespace { count: 2 }).unwrap();
    session.sorry(TrailingWhitespace { count: 1 }).unwrap();

    let failure = session.express_concerns().unwrap_err();
    assert_eq!(failure.count(Severity::Worry), 1);
    assert_eq!(failure.count(Severity::Sorry), 1);
    assert_eq!(failure.diagnostics()[0].kind(), "trailing-whitespace");
    assert_eq!(
        failure.diagnostics()[0].hint().as_deref(),
        Some("remove the 2 trailing characters")
    );
}
