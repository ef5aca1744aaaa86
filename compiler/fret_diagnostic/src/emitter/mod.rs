//! Diagnostic emitters.
//!
//! An emitter writes diagnostics and failures somewhere a person will read
//! them. [`TerminalEmitter`] is the human-readable one, with optional ANSI
//! colors.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, Failure};

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic reported against `filename`.
    fn emit(&mut self, diagnostic: &Diagnostic<'_>, filename: &str);

    /// Emit multiple diagnostics, in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic<'_>], filename: &str) {
        for diagnostic in diagnostics {
            self.emit(diagnostic, filename);
        }
    }

    /// Emit every diagnostic of a failure followed by its summary.
    fn emit_failure(&mut self, failure: &Failure<'_>) {
        self.emit_all(failure.diagnostics(), failure.filename());
        self.emit_summary(failure);
    }

    /// Emit the one-line summary of a failure.
    fn emit_summary(&mut self, failure: &Failure<'_>);

    /// Flush any buffered output.
    fn flush(&mut self);
}
