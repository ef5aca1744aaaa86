//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::render::{colors, severity_color, summary, write_diagnostic, Style};
use crate::{Diagnostic, Failure, FailureCause, Severity};

use super::DiagnosticEmitter;

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when writing to a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    style: Style,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            style: Style {
                colors: mode.should_use_colors(is_tty),
            },
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>, filename: &str) {
        let mut text = String::new();
        write_diagnostic(&mut text, diagnostic, filename, self.style);
        let _ = writeln!(self.writer, "{text}");
    }

    fn emit_summary(&mut self, failure: &Failure<'_>) {
        let severity = match failure.cause() {
            FailureCause::Panic => Severity::Panic,
            FailureCause::LimitExceeded { .. } | FailureCause::Concerns => {
                if failure.count(Severity::Sorry) > 0 {
                    Severity::Sorry
                } else {
                    Severity::Worry
                }
            }
        };
        let line = summary(failure);
        if self.style.colors {
            let _ = writeln!(
                self.writer,
                "{}{line}{}",
                severity_color(severity),
                colors::RESET
            );
        } else {
            let _ = writeln!(self.writer, "{line}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
