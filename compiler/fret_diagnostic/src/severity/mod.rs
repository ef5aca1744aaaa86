//! Diagnostic severities.

use std::fmt;

/// How serious a reported problem is.
///
/// Ordered from least to most severe, so `Worry < Sorry < Panic`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// Non-fatal; parsing continues unaffected.
    Worry,
    /// Fatal to correctness, but parsing continues to gather more problems.
    Sorry,
    /// Parsing cannot meaningfully continue.
    Panic,
}

impl Severity {
    /// Lowercase label used in rendered reports.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Worry => "worry",
            Severity::Sorry => "sorry",
            Severity::Panic => "panic",
        }
    }

    /// Label for `count` diagnostics of this severity ("1 worry", "2 worries").
    pub fn counted(self, count: usize) -> String {
        let noun = match (self, count) {
            (_, 1) => self.label(),
            (Severity::Worry, _) => "worries",
            (Severity::Sorry, _) => "sorries",
            (Severity::Panic, _) => "panics",
        };
        format!("{count} {noun}")
    }

    /// Whether diagnostics of this severity may be held back and reported later.
    pub const fn is_bufferable(self) -> bool {
        !matches!(self, Severity::Panic)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests;
