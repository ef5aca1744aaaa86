//! Diagnostic ledger: the per-session buffer of worries and sorries.

use crate::policy::{classify, Action};
use crate::Diagnostic;

/// Buffered diagnostics allowed before a session escalates.
pub const DEFAULT_LIMIT: usize = 10;

/// Filename label used until a session is told what it is parsing.
pub const UNSPECIFIED_FILE: &str = "<unspecified file>";

/// Ordered buffer of not-yet-surfaced diagnostics.
///
/// Insertion order is report order, which is also display order.
#[derive(Debug)]
pub struct Ledger<'src> {
    buffered: Vec<Diagnostic<'src>>,
    limit: usize,
    filename: String,
}

impl Default for Ledger<'_> {
    fn default() -> Self {
        Self::new(UNSPECIFIED_FILE, DEFAULT_LIMIT)
    }
}

impl<'src> Ledger<'src> {
    /// # Panics
    /// Panics if `limit` is zero.
    #[track_caller]
    pub fn new(filename: impl Into<String>, limit: usize) -> Self {
        assert_limit(limit);
        Ledger {
            buffered: Vec::new(),
            limit,
            filename: filename.into(),
        }
    }

    /// Classify a diagnostic against the current count and store it.
    ///
    /// The returned action is computed before the diagnostic is appended.
    /// Panics are never buffered: a diagnostic classified
    /// [`Action::RaiseImmediately`] is dropped here and the caller is
    /// expected to raise its own copy.
    ///
    /// # Panics
    /// In debug builds, panics if handed a panic diagnostic.
    #[track_caller]
    pub fn record(&mut self, diagnostic: Diagnostic<'src>) -> Action {
        debug_assert!(
            diagnostic.severity().is_bufferable(),
            "a {} diagnostic cannot be recorded in a ledger",
            diagnostic.severity()
        );
        let action = classify(self.buffered.len(), self.limit, diagnostic.severity());
        if action != Action::RaiseImmediately {
            self.buffered.push(diagnostic);
        }
        action
    }

    pub fn is_full(&self) -> bool {
        self.buffered.len() >= self.limit
    }

    /// Take every buffered diagnostic, in order, leaving the ledger empty.
    pub fn drain(&mut self) -> Vec<Diagnostic<'src>> {
        std::mem::take(&mut self.buffered)
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    /// # Panics
    /// Panics if `limit` is zero, or not above the number of diagnostics
    /// already buffered: a ledger at its limit must have escalated already.
    #[track_caller]
    pub fn set_limit(&mut self, limit: usize) {
        assert_limit(limit);
        assert!(
            limit > self.buffered.len(),
            "diagnostic limit {limit} must exceed the {} already buffered",
            self.buffered.len()
        );
        self.limit = limit;
    }

    pub fn len(&self) -> usize {
        self.buffered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffered.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Buffered diagnostics without draining them.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic<'src>> {
        self.buffered.iter()
    }
}

#[track_caller]
fn assert_limit(limit: usize) {
    assert!(limit > 0, "diagnostic limit must be positive");
}

#[cfg(test)]
mod tests;
