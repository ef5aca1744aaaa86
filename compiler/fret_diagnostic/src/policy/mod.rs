//! Severity policy: what to do with an incoming diagnostic.
//!
//! Pure decision logic with no access to the ledger itself; callers pass
//! the current buffered count and limit.

use crate::Severity;

/// What the session does with a newly reported diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    /// Store it and keep parsing.
    Buffer,
    /// Store it, then fail with everything buffered so far.
    ///
    /// The triggering diagnostic keeps its own severity; the failure is
    /// marked as a limit escalation rather than a panic.
    BufferThenEscalate,
    /// Fail right away with this diagnostic alone.
    RaiseImmediately,
}

/// Classify an incoming diagnostic.
///
/// `buffered` is the count before the incoming diagnostic is stored.
/// A worry or sorry that would bring the count up to `limit` escalates.
///
/// ```
/// use fret_diagnostic::{classify, Action, Severity};
///
/// assert_eq!(classify(0, 10, Severity::Worry), Action::Buffer);
/// assert_eq!(classify(9, 10, Severity::Sorry), Action::BufferThenEscalate);
/// assert_eq!(classify(0, 10, Severity::Panic), Action::RaiseImmediately);
/// ```
pub fn classify(buffered: usize, limit: usize, incoming: Severity) -> Action {
    if !incoming.is_bufferable() {
        return Action::RaiseImmediately;
    }
    if buffered.saturating_add(1) >= limit {
        Action::BufferThenEscalate
    } else {
        Action::Buffer
    }
}
