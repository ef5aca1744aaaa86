//! Reported problems.
//!
//! A [`Concern`] is what a parser hands to the session: a problem plus an
//! optional explicit hint and anchor. The session stamps it with a severity
//! and freezes it into a [`Diagnostic`].

use crate::anchor::{Anchor, Anchored, Location};
use crate::kinds::{Explain, Problem};
use crate::Severity;

/// The argument of a report call.
///
/// Built from any kind record, a [`Problem`], or plain text (which becomes
/// an ad hoc problem):
///
/// ```
/// use fret_diagnostic::{Anchor, Concern, ExtraParen};
///
/// let text = "a)";
/// let concern = Concern::new(ExtraParen { close: ')' })
///     .at(&Anchor::point(text, 1))
///     .with_hint("this paren was never opened");
/// # let _ = concern;
/// ```
#[derive(Clone, Debug)]
pub struct Concern<'src> {
    problem: Problem,
    hint: Option<String>,
    anchor: Option<Anchor<'src>>,
}

impl<'src> Concern<'src> {
    pub fn new(problem: impl Into<Problem>) -> Self {
        Concern {
            problem: problem.into(),
            hint: None,
            anchor: None,
        }
    }

    /// Point the concern at a position in the parsed text.
    #[must_use]
    pub fn at(mut self, site: &impl Anchored<'src>) -> Self {
        self.anchor = Some(site.anchor());
        self
    }

    /// Give advice that takes precedence over the kind's own hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<Problem> for Concern<'_> {
    fn from(problem: Problem) -> Self {
        Concern::new(problem)
    }
}

impl From<&str> for Concern<'_> {
    fn from(message: &str) -> Self {
        Concern::new(message)
    }
}

impl From<String> for Concern<'_> {
    fn from(message: String) -> Self {
        Concern::new(message)
    }
}

macro_rules! impl_concern_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<crate::kinds::$kind> for Concern<'_> {
                fn from(kind: crate::kinds::$kind) -> Self {
                    Concern::new(kind)
                }
            }
        )*
    };
}

impl_concern_from_kind!(AdHoc, Expected, EarlyEnd, ExtraParen, Unclosed, Mismatched, Obsolete);

/// One reported problem.
///
/// Immutable once built. The message and hint are resolved from the
/// problem's kind each time they are asked for.
#[derive(Clone, Debug)]
pub struct Diagnostic<'src> {
    severity: Severity,
    problem: Problem,
    hint: Option<String>,
    anchor: Option<Anchor<'src>>,
}

impl<'src> Diagnostic<'src> {
    pub fn new(severity: Severity, concern: impl Into<Concern<'src>>) -> Self {
        let Concern {
            problem,
            hint,
            anchor,
        } = concern.into();
        Diagnostic {
            severity,
            problem,
            hint,
            anchor,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Tag of the problem's kind.
    pub fn kind(&self) -> &'static str {
        self.problem.kind()
    }

    pub fn message(&self) -> String {
        self.problem.message()
    }

    /// The explicit hint if one was given, otherwise the kind's hint.
    pub fn hint(&self) -> Option<String> {
        self.hint.clone().or_else(|| self.problem.hint())
    }

    pub fn anchor(&self) -> Option<&Anchor<'src>> {
        self.anchor.as_ref()
    }

    /// Render the anchor, if there is one.
    pub fn location(&self) -> Option<Location> {
        self.anchor.as_ref().map(Anchor::locate)
    }

    /// Detach from the parsed text.
    pub fn into_owned(self) -> Diagnostic<'static> {
        Diagnostic {
            severity: self.severity,
            problem: self.problem,
            hint: self.hint,
            anchor: self.anchor.as_ref().map(Anchor::detach),
        }
    }
}
