//! Checker errors.

use std::io;
use std::path::PathBuf;

use fret_diagnostic::Failure;
use fret_ir::SpanError;

/// Why a check did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError<'src> {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    /// The input does not fit in 32-bit spans.
    #[error("input too large: {0}")]
    TooLarge(#[from] SpanError),
    /// The text has problems; the failure lists them.
    ///
    /// Not a `#[source]`: the failure borrows the checked text, and error
    /// sources must be `'static`.
    #[error("{0}")]
    Reported(Failure<'src>),
}

impl<'src> From<Failure<'src>> for CheckError<'src> {
    fn from(failure: Failure<'src>) -> Self {
        CheckError::Reported(failure)
    }
}

impl CheckError<'_> {
    /// Detach from the checked text.
    pub fn into_owned(self) -> CheckError<'static> {
        match self {
            CheckError::Io { path, source } => CheckError::Io { path, source },
            CheckError::TooLarge(err) => CheckError::TooLarge(err),
            CheckError::Reported(failure) => CheckError::Reported(failure.into_owned()),
        }
    }
}
