//! Diagnostic kinds.
//!
//! A kind is a record type holding the fields captured at the report site,
//! paired with the logic that turns them into a message and, optionally, a
//! hint. Built-in kinds are variants of [`Problem`]; a parser defines its
//! own kinds by implementing [`Explain`] and wrapping them with
//! [`Problem::custom`].

use std::fmt;
use std::sync::Arc;

/// Message and hint construction for one kind of problem.
///
/// Called lazily: a report's message and hint are only built when the
/// diagnostic is observed (rendered or inspected).
pub trait Explain: fmt::Debug {
    /// Stable tag identifying the kind, e.g. `"extra-paren"`.
    fn kind(&self) -> &'static str;

    /// Human-readable description of the problem.
    fn message(&self) -> String;

    /// Remediation advice, if this kind has any to give.
    fn hint(&self) -> Option<String> {
        None
    }
}

/// A free-form problem carrying only its message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdHoc {
    pub message: String,
}

impl AdHoc {
    pub fn new(message: impl Into<String>) -> Self {
        AdHoc {
            message: message.into(),
        }
    }
}

impl Explain for AdHoc {
    fn kind(&self) -> &'static str {
        "adhoc"
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

/// Something specific was required but not found.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expected {
    pub what: String,
    pub found: Option<String>,
}

impl Explain for Expected {
    fn kind(&self) -> &'static str {
        "expected"
    }

    fn message(&self) -> String {
        match &self.found {
            Some(found) => format!("expected {}, found {found}", self.what),
            None => format!("expected {}", self.what),
        }
    }
}

/// The input ended while a construct was still open.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EarlyEnd {
    pub expecting: Option<String>,
}

impl Explain for EarlyEnd {
    fn kind(&self) -> &'static str {
        "early-end"
    }

    fn message(&self) -> String {
        match &self.expecting {
            Some(expecting) => format!("unexpected end of input while looking for {expecting}"),
            None => "unexpected end of input".to_string(),
        }
    }

    fn hint(&self) -> Option<String> {
        self.expecting
            .as_ref()
            .map(|_| "the input may be truncated".to_string())
    }
}

/// A closing delimiter with nothing left open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtraParen {
    pub close: char,
}

impl Explain for ExtraParen {
    fn kind(&self) -> &'static str {
        "extra-paren"
    }

    fn message(&self) -> String {
        format!("unexpected closing `{}`", self.close)
    }

    fn hint(&self) -> Option<String> {
        let open = opening_delimiter(self.close)?;
        Some(format!("remove it, or add a matching `{open}` before it"))
    }
}

/// An opening delimiter still open at the end of input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unclosed {
    pub open: char,
}

impl Explain for Unclosed {
    fn kind(&self) -> &'static str {
        "unclosed"
    }

    fn message(&self) -> String {
        format!("unclosed `{}`", self.open)
    }

    fn hint(&self) -> Option<String> {
        let close = closing_delimiter(self.open)?;
        Some(format!("add a closing `{close}`"))
    }
}

/// A closing delimiter that does not match the innermost open one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mismatched {
    pub open: char,
    pub found: char,
}

impl Explain for Mismatched {
    fn kind(&self) -> &'static str {
        "mismatched"
    }

    fn message(&self) -> String {
        match closing_delimiter(self.open) {
            Some(close) => format!(
                "mismatched closing `{}`; expected `{close}` to close `{}`",
                self.found, self.open
            ),
            None => format!("mismatched closing `{}`", self.found),
        }
    }
}

/// Syntax from an older dialect with a modern replacement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Obsolete {
    pub old: String,
    pub replacement: String,
}

impl Explain for Obsolete {
    fn kind(&self) -> &'static str {
        "obsolete"
    }

    fn message(&self) -> String {
        format!("unsupported use of `{}`", self.old)
    }

    fn hint(&self) -> Option<String> {
        Some(format!("use `{}` instead", self.replacement))
    }
}

/// Every kind a session can report.
#[derive(Clone, Debug)]
pub enum Problem {
    AdHoc(AdHoc),
    Expected(Expected),
    EarlyEnd(EarlyEnd),
    ExtraParen(ExtraParen),
    Unclosed(Unclosed),
    Mismatched(Mismatched),
    Obsolete(Obsolete),
    /// A kind defined outside this crate.
    Custom(Arc<dyn Explain + Send + Sync>),
}

impl Problem {
    /// Wrap a parser-defined kind.
    pub fn custom(kind: impl Explain + Send + Sync + 'static) -> Self {
        Problem::Custom(Arc::new(kind))
    }

    fn explain(&self) -> &dyn Explain {
        match self {
            Problem::AdHoc(p) => p,
            Problem::Expected(p) => p,
            Problem::EarlyEnd(p) => p,
            Problem::ExtraParen(p) => p,
            Problem::Unclosed(p) => p,
            Problem::Mismatched(p) => p,
            Problem::Obsolete(p) => p,
            Problem::Custom(p) => p.as_ref(),
        }
    }
}

impl Explain for Problem {
    fn kind(&self) -> &'static str {
        self.explain().kind()
    }

    fn message(&self) -> String {
        self.explain().message()
    }

    fn hint(&self) -> Option<String> {
        self.explain().hint()
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Problem {
                fn from(kind: $kind) -> Self {
                    Problem::$kind(kind)
                }
            }
        )*
    };
}

impl_from_kind!(AdHoc, Expected, EarlyEnd, ExtraParen, Unclosed, Mismatched, Obsolete);

impl From<&str> for Problem {
    fn from(message: &str) -> Self {
        Problem::AdHoc(AdHoc::new(message))
    }
}

impl From<String> for Problem {
    fn from(message: String) -> Self {
        Problem::AdHoc(AdHoc::new(message))
    }
}

/// Let a parser-defined kind be reported directly, like a built-in one.
///
/// Implements `From<Kind>` for both [`Problem`] (through [`Problem::custom`])
/// and [`Concern`](crate::Concern), so `session.worry(Kind { .. })` works.
///
/// ```
/// use fret_diagnostic::{custom_kind, Explain, Session};
///
/// #[derive(Debug)]
/// struct TabIndent;
///
/// impl Explain for TabIndent {
///     fn kind(&self) -> &'static str {
///         "tab-indent"
///     }
///
///     fn message(&self) -> String {
///         "indented with a tab".to_string()
///     }
/// }
///
/// custom_kind!(TabIndent);
///
/// let mut session = Session::new();
/// session.worry(TabIndent).unwrap();
/// let failure = session.express_concerns().unwrap_err();
/// assert_eq!(failure.diagnostics()[0].kind(), "tab-indent");
/// ```
#[macro_export]
macro_rules! custom_kind {
    ($($kind:ty),* $(,)?) => {
        $(
            impl From<$kind> for $crate::Problem {
                fn from(kind: $kind) -> Self {
                    $crate::Problem::custom(kind)
                }
            }

            impl From<$kind> for $crate::Concern<'_> {
                fn from(kind: $kind) -> Self {
                    $crate::Concern::new(kind)
                }
            }
        )*
    };
}

/// The closing partner of an opening delimiter.
pub fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// The opening partner of a closing delimiter.
pub fn opening_delimiter(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        '>' => Some('<'),
        _ => None,
    }
}
