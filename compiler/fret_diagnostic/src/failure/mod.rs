//! The error a reporting session surfaces.

use thiserror::Error;

use crate::render::render_report;
use crate::{Diagnostic, Severity};

/// Why a session failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureCause {
    /// A panic was raised; buffered diagnostics were discarded.
    Panic,
    /// Buffered worries and sorries reached the session's limit.
    LimitExceeded { limit: usize },
    /// The parse finished with concerns still buffered.
    Concerns,
}

/// A failed parse: every diagnostic the caller needs to see, in order.
///
/// `Display` renders the full report, one diagnostic after another
/// separated by blank lines.
#[derive(Clone, Debug, Error)]
#[error("{}", render_report(.filename, .diagnostics))]
pub struct Failure<'src> {
    filename: String,
    diagnostics: Vec<Diagnostic<'src>>,
    cause: FailureCause,
}

impl<'src> Failure<'src> {
    pub(crate) fn panic(filename: impl Into<String>, diagnostic: Diagnostic<'src>) -> Self {
        Failure {
            filename: filename.into(),
            diagnostics: vec![diagnostic],
            cause: FailureCause::Panic,
        }
    }

    pub(crate) fn aggregate(
        filename: impl Into<String>,
        diagnostics: Vec<Diagnostic<'src>>,
        cause: FailureCause,
    ) -> Self {
        Failure {
            filename: filename.into(),
            diagnostics,
            cause,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'src>] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic<'src>> {
        self.diagnostics
    }

    pub fn cause(&self) -> FailureCause {
        self.cause
    }

    /// Whether the failure was forced by too many buffered diagnostics.
    pub fn escalated_due_to_limit(&self) -> bool {
        matches!(self.cause, FailureCause::LimitExceeded { .. })
    }

    /// Number of diagnostics of one severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Resolved messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(Diagnostic::message).collect()
    }

    /// Detach every anchor so the failure can outlive the parsed text.
    pub fn into_owned(self) -> Failure<'static> {
        Failure {
            filename: self.filename,
            diagnostics: self
                .diagnostics
                .into_iter()
                .map(Diagnostic::into_owned)
                .collect(),
            cause: self.cause,
        }
    }
}
