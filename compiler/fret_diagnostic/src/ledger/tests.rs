use super::*;
use crate::Severity;
use pretty_assertions::assert_eq;

fn messages(diagnostics: &[Diagnostic<'_>]) -> Vec<String> {
    diagnostics.iter().map(Diagnostic::message).collect()
}

#[test]
fn test_defaults() {
    let ledger = Ledger::default();
    assert_eq!(ledger.limit(), DEFAULT_LIMIT);
    assert_eq!(ledger.filename(), UNSPECIFIED_FILE);
    assert!(ledger.is_empty());
    assert!(!ledger.is_full());
}

#[test]
fn test_record_uses_pre_append_count() {
    let mut ledger = Ledger::new("input", 3);
    assert_eq!(
        ledger.record(Diagnostic::new(Severity::Worry, "one")),
        Action::Buffer
    );
    assert_eq!(
        ledger.record(Diagnostic::new(Severity::Sorry, "two")),
        Action::Buffer
    );
    assert_eq!(
        ledger.record(Diagnostic::new(Severity::Worry, "three")),
        Action::BufferThenEscalate
    );
    assert_eq!(ledger.len(), 3);
    assert!(ledger.is_full());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "a panic diagnostic cannot be recorded in a ledger")]
fn test_recording_a_panic_asserts() {
    let mut ledger = Ledger::default();
    ledger.record(Diagnostic::new(Severity::Panic, "misrouted"));
}

#[test]
#[cfg(not(debug_assertions))]
fn test_panic_is_not_buffered() {
    let mut ledger = Ledger::default();
    ledger.record(Diagnostic::new(Severity::Worry, "kept"));
    assert_eq!(
        ledger.record(Diagnostic::new(Severity::Panic, "dropped")),
        Action::RaiseImmediately
    );
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_drain_preserves_order_and_empties() {
    let mut ledger = Ledger::default();
    for (severity, text) in [
        (Severity::Sorry, "a"),
        (Severity::Worry, "b"),
        (Severity::Sorry, "c"),
        (Severity::Worry, "d"),
    ] {
        ledger.record(Diagnostic::new(severity, text));
    }
    let peeked: Vec<String> = ledger.iter().map(Diagnostic::message).collect();

    let drained = ledger.drain();
    assert_eq!(messages(&drained), vec!["a", "b", "c", "d"]);
    assert_eq!(peeked, messages(&drained));
    assert!(ledger.is_empty());
    assert!(ledger.drain().is_empty());
}

#[test]
fn test_configuration_mutators() {
    let mut ledger = Ledger::default();
    ledger.set_filename("grammar.txt");
    ledger.set_limit(2);
    assert_eq!(ledger.filename(), "grammar.txt");
    assert_eq!(ledger.limit(), 2);
}

#[test]
fn test_limit_can_be_lowered_above_buffered_count() {
    let mut ledger = Ledger::default();
    for text in ["a", "b"] {
        ledger.record(Diagnostic::new(Severity::Worry, text));
    }
    ledger.set_limit(3);
    assert!(!ledger.is_full());
    assert_eq!(
        ledger.record(Diagnostic::new(Severity::Worry, "c")),
        Action::BufferThenEscalate
    );
}

#[test]
#[should_panic(expected = "diagnostic limit 2 must exceed the 3 already buffered")]
fn test_limit_at_or_below_buffered_count_rejected() {
    let mut ledger = Ledger::default();
    for text in ["a", "b", "c"] {
        ledger.record(Diagnostic::new(Severity::Worry, text));
    }
    ledger.set_limit(2);
}

#[test]
#[should_panic(expected = "diagnostic limit must be positive")]
fn test_zero_limit_rejected() {
    let mut ledger = Ledger::default();
    ledger.set_limit(0);
}

#[test]
#[should_panic(expected = "diagnostic limit must be positive")]
fn test_zero_limit_rejected_at_construction() {
    let _ = Ledger::new("input", 0);
}
