//! Reporting sessions.
//!
//! A [`Session`] is what a parser holds while it runs. Worries and sorries
//! are buffered in the session's [`Ledger`] until the parse finishes or the
//! buffer reaches its limit; a panic fails the session on the spot.
//!
//! ```text
//!            worry / sorry (below limit)
//!              ┌──────┐
//!              ▼      │
//!           ┌────────────┐  limit reached   ┌───────────┐
//!  new() ──▶│   Active   │─────────────────▶│ Escalated │
//!           └────────────┘                  └───────────┘
//!              │      │  panic               ┌───────────┐
//!              │      └─────────────────────▶│  Raised   │
//!              │ express_concerns            └───────────┘
//!              ▼
//!           ┌────────────┐
//!           │ Concluded  │
//!           └────────────┘
//! ```

use std::fmt;

use tracing::{debug, trace, warn};

use crate::ledger::{Ledger, DEFAULT_LIMIT, UNSPECIFIED_FILE};
use crate::policy::Action;
use crate::{Concern, Diagnostic, Failure, FailureCause, Severity};

/// Initial configuration for a session.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionConfig {
    /// Label shown in reports.
    pub filename: String,
    /// Buffered worries and sorries allowed before escalating (must be positive).
    pub limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            filename: UNSPECIFIED_FILE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Accepting reports.
    Active,
    /// Failed because the buffer reached its limit.
    Escalated,
    /// Failed because of a panic.
    Raised,
    /// Finished through `express_concerns`.
    Concluded,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Active => write!(f, "active"),
            SessionState::Escalated => write!(f, "escalated"),
            SessionState::Raised => write!(f, "raised"),
            SessionState::Concluded => write!(f, "concluded"),
        }
    }
}

/// Diagnostic reporting for one parse.
///
/// # Example
///
/// ```
/// use fret_diagnostic::{Session, Severity};
///
/// let mut session = Session::new();
/// session.set_limit(2);
///
/// assert!(session.worry("a").is_ok());
/// let failure = session.sorry("b").unwrap_err();
///
/// assert!(failure.escalated_due_to_limit());
/// assert_eq!(failure.messages(), vec!["a", "b"]);
/// assert_eq!(failure.diagnostics()[1].severity(), Severity::Sorry);
/// ```
///
/// # Panics
///
/// Every reporting and configuration method panics if the session has
/// already left [`SessionState::Active`]. Reporting into a finished session
/// is a bug in the parser, not a problem with its input.
#[derive(Debug)]
pub struct Session<'src> {
    ledger: Ledger<'src>,
    state: SessionState,
}

impl Default for Session<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Session<'src> {
    pub fn new() -> Self {
        Session {
            ledger: Ledger::default(),
            state: SessionState::Active,
        }
    }

    /// # Panics
    /// Panics if `config.limit` is zero.
    #[track_caller]
    pub fn with_config(config: SessionConfig) -> Self {
        Session {
            ledger: Ledger::new(config.filename, config.limit),
            state: SessionState::Active,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn filename(&self) -> &str {
        self.ledger.filename()
    }

    pub fn limit(&self) -> usize {
        self.ledger.limit()
    }

    /// Number of buffered worries and sorries.
    pub fn buffered(&self) -> usize {
        self.ledger.len()
    }

    /// Buffered diagnostics, oldest first.
    pub fn concerns(&self) -> impl Iterator<Item = &Diagnostic<'src>> {
        self.ledger.iter()
    }

    #[track_caller]
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.ensure_active("set the filename");
        self.ledger.set_filename(filename);
        debug!(filename = self.ledger.filename(), "session filename set");
    }

    /// # Panics
    /// Panics if `limit` is zero or does not exceed [`Session::buffered`].
    #[track_caller]
    pub fn set_limit(&mut self, limit: usize) {
        self.ensure_active("set the limit");
        self.ledger.set_limit(limit);
        debug!(limit, "session limit set");
    }

    /// Report a non-fatal problem.
    ///
    /// Fails only when this worry fills the buffer to its limit; the failure
    /// then carries every buffered diagnostic, this one last.
    #[track_caller]
    pub fn worry(&mut self, concern: impl Into<Concern<'src>>) -> Result<(), Failure<'src>> {
        self.buffer(Severity::Worry, concern.into())
    }

    /// Report a problem that makes the parse wrong but lets it continue.
    ///
    /// Same buffering and limit rules as [`Session::worry`].
    #[track_caller]
    pub fn sorry(&mut self, concern: impl Into<Concern<'src>>) -> Result<(), Failure<'src>> {
        self.buffer(Severity::Sorry, concern.into())
    }

    /// Stop the parse.
    ///
    /// Everything buffered so far is discarded; the returned failure holds
    /// this panic alone.
    #[track_caller]
    pub fn panic(&mut self, concern: impl Into<Concern<'src>>) -> Failure<'src> {
        self.ensure_active("raise a panic");
        let diagnostic = Diagnostic::new(Severity::Panic, concern);
        let discarded = self.ledger.drain().len();
        self.state = SessionState::Raised;
        debug!(
            kind = diagnostic.kind(),
            discarded,
            filename = self.ledger.filename(),
            "panic raised"
        );
        Failure::panic(self.ledger.filename(), diagnostic)
    }

    /// Finish the session.
    ///
    /// Succeeds when nothing is buffered; otherwise fails with every
    /// buffered diagnostic in report order.
    #[track_caller]
    pub fn express_concerns(&mut self) -> Result<(), Failure<'src>> {
        self.ensure_active("express concerns");
        self.state = SessionState::Concluded;
        if self.ledger.is_empty() {
            debug!(filename = self.ledger.filename(), "session concluded cleanly");
            return Ok(());
        }
        let diagnostics = self.ledger.drain();
        debug!(
            count = diagnostics.len(),
            filename = self.ledger.filename(),
            "session concluded with concerns"
        );
        Err(Failure::aggregate(
            self.ledger.filename(),
            diagnostics,
            FailureCause::Concerns,
        ))
    }

    #[track_caller]
    fn buffer(&mut self, severity: Severity, concern: Concern<'src>) -> Result<(), Failure<'src>> {
        self.ensure_active("report a concern");
        let diagnostic = Diagnostic::new(severity, concern);
        let kind = diagnostic.kind();

        match self.ledger.record(diagnostic) {
            Action::Buffer => {
                trace!(%severity, kind, buffered = self.ledger.len(), "concern buffered");
                Ok(())
            }
            Action::BufferThenEscalate => {
                let limit = self.ledger.limit();
                let diagnostics = self.ledger.drain();
                self.state = SessionState::Escalated;
                debug!(
                    %severity,
                    kind,
                    limit,
                    count = diagnostics.len(),
                    filename = self.ledger.filename(),
                    "concern limit reached"
                );
                Err(Failure::aggregate(
                    self.ledger.filename(),
                    diagnostics,
                    FailureCause::LimitExceeded { limit },
                ))
            }
            Action::RaiseImmediately => unreachable!("worries and sorries are always buffered"),
        }
    }

    #[track_caller]
    fn ensure_active(&self, operation: &str) {
        if self.state != SessionState::Active {
            panic!(
                "cannot {operation}: reporting session for {} is already {}",
                self.ledger.filename(),
                self.state
            );
        }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if self.state == SessionState::Active && !self.ledger.is_empty() {
            warn!(
                count = self.ledger.len(),
                filename = self.ledger.filename(),
                "reporting session dropped with unexpressed concerns"
            );
        }
    }
}

#[cfg(test)]
mod tests;
