#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{Anchor, Concern, EarlyEnd, Explain, ExtraParen};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn session_with_limit(limit: usize) -> Session<'static> {
    Session::with_config(SessionConfig::default().with_limit(limit))
}

#[test]
fn test_defaults() {
    let session = Session::new();
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.limit(), 10);
    assert_eq!(session.filename(), "<unspecified file>");
    assert_eq!(session.buffered(), 0);
}

#[test]
fn test_with_config() {
    let session = Session::with_config(
        SessionConfig::default()
            .with_filename("grammar.txt")
            .with_limit(3),
    );
    assert_eq!(session.filename(), "grammar.txt");
    assert_eq!(session.limit(), 3);
}

#[test]
fn test_below_limit_stays_active() {
    let mut session = Session::new();
    for i in 0..9 {
        assert!(session.worry(format!("w{i}")).is_ok());
    }
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.buffered(), 9);
    let _ = session.express_concerns();
}

#[test]
fn test_tenth_concern_escalates_with_all_ten() {
    let mut session = Session::new();
    for i in 0..9 {
        let concern = format!("c{i}");
        if i % 2 == 0 {
            session.worry(concern).unwrap();
        } else {
            session.sorry(concern).unwrap();
        }
    }
    let failure = session.sorry("c9").unwrap_err();

    assert_eq!(session.state(), SessionState::Escalated);
    assert_eq!(session.buffered(), 0);
    assert!(failure.escalated_due_to_limit());
    assert_eq!(failure.cause(), FailureCause::LimitExceeded { limit: 10 });
    assert_eq!(failure.diagnostics().len(), 10);
    assert_eq!(failure.messages().last().map(String::as_str), Some("c9"));
}

#[test]
fn test_limit_two_scenario() {
    let mut session = Session::new();
    session.set_limit(2);
    session.worry("a").unwrap();
    let failure = session.sorry("b").unwrap_err();

    assert_eq!(failure.messages(), vec!["a", "b"]);
    assert!(failure.escalated_due_to_limit());
    let severities: Vec<Severity> = failure
        .diagnostics()
        .iter()
        .map(Diagnostic::severity)
        .collect();
    // Escalation does not turn the triggering sorry into a panic.
    assert_eq!(severities, vec![Severity::Worry, Severity::Sorry]);
}

#[test]
fn test_three_worries_then_express_concerns() {
    let mut session = Session::new();
    for text in ["one", "two", "three"] {
        session.worry(text).unwrap();
    }
    let failure = session.express_concerns().unwrap_err();

    assert_eq!(session.state(), SessionState::Concluded);
    assert_eq!(failure.messages(), vec!["one", "two", "three"]);
    assert!(!failure.escalated_due_to_limit());
    assert_eq!(failure.cause(), FailureCause::Concerns);
}

#[test]
fn test_express_concerns_on_empty_ledger_is_clean() {
    let mut session = Session::new();
    assert!(session.express_concerns().is_ok());
    assert_eq!(session.state(), SessionState::Concluded);
}

#[test]
fn test_panic_discards_buffered_worries() {
    let mut session = Session::new();
    session.set_filename("input.txt");
    session.worry("first").unwrap();
    session.worry("second").unwrap();
    let failure = session.panic("X");

    assert_eq!(session.state(), SessionState::Raised);
    assert_eq!(session.buffered(), 0);
    assert_eq!(failure.messages(), vec!["X"]);
    assert_eq!(failure.filename(), "input.txt");
    assert_eq!(failure.cause(), FailureCause::Panic);
    assert!(!failure.escalated_due_to_limit());
    assert_eq!(failure.diagnostics()[0].severity(), Severity::Panic);

    let rendered = failure.to_string();
    assert!(!rendered.contains("first"));
    assert!(!rendered.contains("second"));
}

#[test]
fn test_panic_on_empty_session() {
    let mut session = Session::new();
    let failure = session.panic(EarlyEnd { expecting: None });
    assert_eq!(failure.diagnostics().len(), 1);
    assert_eq!(failure.diagnostics()[0].kind(), "early-end");
}

#[test]
fn test_typed_report_keeps_anchor_and_hint() {
    let text = "(a))";
    let mut session = Session::new();
    session
        .sorry(Concern::new(ExtraParen { close: ')' }).at(&Anchor::point(text, 3)))
        .unwrap();
    let failure = session.express_concerns().unwrap_err();
    let diagnostic = &failure.diagnostics()[0];

    assert_eq!(diagnostic.kind(), "extra-paren");
    assert_eq!(
        diagnostic.hint().as_deref(),
        Some("remove it, or add a matching `(` before it")
    );
    assert_eq!(diagnostic.location().map(|l| l.column), Some(4));
}

#[derive(Debug)]
struct Shadowed {
    name: &'static str,
}

impl Explain for Shadowed {
    fn kind(&self) -> &'static str {
        "shadowed"
    }

    fn message(&self) -> String {
        format!("`{}` shadows an earlier rule", self.name)
    }
}

crate::custom_kind!(Shadowed);

#[test]
fn test_custom_kind_through_session() {
    let mut session = Session::new();
    let text = "term = a\nterm = b";
    session.worry(Shadowed { name: "term" }).unwrap();
    session
        .sorry(Concern::new(Shadowed { name: "term" }).at(&Anchor::point(text, 9)))
        .unwrap();
    let failure = session.express_concerns().unwrap_err();
    assert_eq!(failure.diagnostics()[0].kind(), "shadowed");
    assert_eq!(failure.diagnostics()[1].location().map(|l| l.line), Some(2));
    assert_eq!(
        failure.messages(),
        vec!["`term` shadows an earlier rule", "`term` shadows an earlier rule"]
    );
}

#[test]
fn test_concerns_peek_without_draining() {
    let mut session = Session::new();
    session.sorry("a").unwrap();
    session.worry("b").unwrap();
    let peeked: Vec<String> = session.concerns().map(Diagnostic::message).collect();
    assert_eq!(peeked, vec!["a", "b"]);
    assert_eq!(session.buffered(), 2);
    let _ = session.express_concerns();
}

#[test]
fn test_lowering_limit_escalates_at_new_limit() {
    let mut session = Session::new();
    for text in ["a", "b", "c"] {
        session.worry(text).unwrap();
    }
    session.set_limit(4);
    assert_eq!(session.state(), SessionState::Active);
    let failure = session.worry("d").unwrap_err();
    assert_eq!(failure.messages(), vec!["a", "b", "c", "d"]);
    assert_eq!(failure.cause(), FailureCause::LimitExceeded { limit: 4 });
}

#[test]
#[should_panic(expected = "diagnostic limit 2 must exceed the 3 already buffered")]
fn test_lowering_limit_to_buffered_count_panics() {
    let mut session = Session::new();
    for text in ["a", "b", "c"] {
        session.worry(text).unwrap();
    }
    session.set_limit(2);
}

#[test]
#[should_panic(expected = "cannot report a concern: reporting session for <unspecified file> is already escalated")]
fn test_report_after_escalation_panics() {
    let mut session = session_with_limit(1);
    let _ = session.worry("a");
    let _ = session.worry("b");
}

#[test]
#[should_panic(expected = "cannot express concerns")]
fn test_express_concerns_after_panic_panics() {
    let mut session = Session::new();
    let _ = session.panic("X");
    let _ = session.express_concerns();
}

#[test]
#[should_panic(expected = "cannot set the filename")]
fn test_set_filename_after_conclusion_panics() {
    let mut session = Session::new();
    let _ = session.express_concerns();
    session.set_filename("late.txt");
}

#[test]
#[should_panic(expected = "cannot set the limit")]
fn test_set_limit_after_raise_panics() {
    let mut session = Session::new();
    let _ = session.panic("X");
    session.set_limit(5);
}

#[test]
#[should_panic(expected = "diagnostic limit must be positive")]
fn test_zero_limit_panics() {
    let _ = session_with_limit(0);
}

fn concern_sequence() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), "[a-z]{1,6}"), 0..40)
}

proptest! {
    #[test]
    fn below_limit_never_fails(reports in concern_sequence(), extra in 1usize..20) {
        let limit = reports.len() + extra;
        let mut session = session_with_limit(limit);
        for (is_sorry, text) in &reports {
            let result = if *is_sorry {
                session.sorry(text.as_str())
            } else {
                session.worry(text.as_str())
            };
            prop_assert!(result.is_ok());
        }
        prop_assert_eq!(session.state(), SessionState::Active);
        prop_assert_eq!(session.buffered(), reports.len());
        let _ = session.express_concerns();
    }

    #[test]
    fn escalation_preserves_order(reports in concern_sequence(), limit in 1usize..10) {
        let mut session = session_with_limit(limit);
        let mut sent = Vec::new();
        let mut failure = None;
        for (is_sorry, text) in reports {
            sent.push(text.clone());
            let result = if is_sorry { session.sorry(text) } else { session.worry(text) };
            if let Err(f) = result {
                failure = Some(f);
                break;
            }
        }
        match failure {
            Some(failure) => {
                prop_assert_eq!(sent.len(), limit);
                prop_assert!(failure.escalated_due_to_limit());
                prop_assert_eq!(failure.messages(), sent);
            }
            None => {
                prop_assert!(sent.len() < limit);
                let result = session.express_concerns();
                if sent.is_empty() {
                    prop_assert!(result.is_ok());
                } else {
                    let failure = result.unwrap_err();
                    prop_assert!(!failure.escalated_due_to_limit());
                    prop_assert_eq!(failure.messages(), sent);
                }
            }
        }
    }

    #[test]
    fn panic_surfaces_only_itself(buffered in 0usize..9) {
        let mut session = Session::new();
        for i in 0..buffered {
            session.worry(format!("w{i}")).unwrap();
        }
        let failure = session.panic("boom");
        prop_assert_eq!(failure.messages(), vec!["boom".to_string()]);
        prop_assert_eq!(session.buffered(), 0);
    }
}
