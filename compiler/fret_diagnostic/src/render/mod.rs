//! Text rendering for diagnostics and failures.
//!
//! ```text
//! sorry[extra-paren]: unexpected closing `)`
//!   hint: remove it, or add a matching `(` before it
//!  --> input.txt:3:9
//!   |
//! 3 | foo(bar))
//!   |         ^
//! ```

use std::fmt::Write;

use crate::{Diagnostic, Failure, FailureCause, Severity};

/// ANSI color codes for terminal output.
pub(crate) mod colors {
    pub const SORRY: &str = "\x1b[1;31m"; // Bold red
    pub const WORRY: &str = "\x1b[1;33m"; // Bold yellow
    pub const PANIC: &str = "\x1b[1;35m"; // Bold magenta
    pub const HINT: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

pub(crate) fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Worry => colors::WORRY,
        Severity::Sorry => colors::SORRY,
        Severity::Panic => colors::PANIC,
    }
}

/// Output styling for [`write_diagnostic`].
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Style {
    pub colors: bool,
}

impl Style {
    fn paint(self, out: &mut String, text: &str, color: &str) {
        if self.colors {
            let _ = write!(out, "{color}{text}{}", colors::RESET);
        } else {
            out.push_str(text);
        }
    }
}

/// Render one diagnostic as plain text, without a trailing newline.
pub fn render_diagnostic(diagnostic: &Diagnostic<'_>, filename: &str) -> String {
    let mut out = String::new();
    write_diagnostic(&mut out, diagnostic, filename, Style::default());
    trim_newline(out)
}

/// Render diagnostics in order, separated by blank lines.
pub fn render_report(filename: &str, diagnostics: &[Diagnostic<'_>]) -> String {
    let mut out = String::new();
    for (i, diagnostic) in diagnostics.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_diagnostic(&mut out, diagnostic, filename, Style::default());
    }
    trim_newline(out)
}

/// One-line summary of a failure.
pub fn summary(failure: &Failure<'_>) -> String {
    let counts: Vec<String> = [Severity::Panic, Severity::Sorry, Severity::Worry]
        .into_iter()
        .filter_map(|severity| {
            let count = failure.count(severity);
            (count > 0).then(|| severity.counted(count))
        })
        .collect();
    let mut line = format!(
        "aborting due to {} in {}",
        counts.join(", "),
        failure.filename()
    );
    if let FailureCause::LimitExceeded { limit } = failure.cause() {
        let _ = write!(line, " (stopped at the limit of {limit})");
    }
    line
}

pub(crate) fn write_diagnostic(
    out: &mut String,
    diagnostic: &Diagnostic<'_>,
    filename: &str,
    style: Style,
) {
    let severity = diagnostic.severity();
    style.paint(out, severity.label(), severity_color(severity));
    style.paint(out, &format!("[{}]", diagnostic.kind()), colors::BOLD);
    let _ = writeln!(out, ": {}", diagnostic.message());

    if let Some(hint) = diagnostic.hint() {
        out.push_str("  ");
        style.paint(out, "hint", colors::HINT);
        let _ = writeln!(out, ": {hint}");
    }

    let Some(location) = diagnostic.location() else {
        out.push_str("  ");
        style.paint(out, "-->", colors::GUTTER);
        let _ = writeln!(out, " {filename}");
        return;
    };

    let number = location.line.to_string();
    let pad = " ".repeat(number.len());

    out.push_str(&pad);
    style.paint(out, "-->", colors::GUTTER);
    let _ = writeln!(out, " {filename}:{}:{}", location.line, location.column);

    out.push_str(&pad);
    out.push(' ');
    style.paint(out, "|", colors::GUTTER);
    out.push('\n');

    style.paint(out, &format!("{number} |"), colors::GUTTER);
    if location.excerpt.is_empty() {
        out.push('\n');
    } else {
        let _ = writeln!(out, " {}", location.excerpt);
    }

    out.push_str(&pad);
    out.push(' ');
    style.paint(out, "|", colors::GUTTER);
    out.push(' ');
    // Keep tabs so the marker lines up under the excerpt.
    for ch in location
        .excerpt
        .chars()
        .take(location.column.saturating_sub(1) as usize)
    {
        out.push(if ch == '\t' { '\t' } else { ' ' });
    }
    let padding = (location.column.saturating_sub(1) as usize)
        .saturating_sub(location.excerpt.chars().count());
    out.push_str(&" ".repeat(padding));
    style.paint(
        out,
        &"^".repeat(location.width as usize),
        severity_color(severity),
    );
    out.push('\n');
}

fn trim_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
