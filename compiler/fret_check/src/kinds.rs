//! Checker-specific diagnostic kinds.

use fret_diagnostic::{custom_kind, Explain};

/// Spaces or tabs at the end of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrailingWhitespace {
    pub count: usize,
}

impl Explain for TrailingWhitespace {
    fn kind(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn message(&self) -> String {
        "trailing whitespace".to_string()
    }

    fn hint(&self) -> Option<String> {
        Some(if self.count == 1 {
            "remove the trailing character".to_string()
        } else {
            format!("remove the {} trailing characters", self.count)
        })
    }
}

custom_kind!(TrailingWhitespace);

#[cfg(test)]
mod tests;
