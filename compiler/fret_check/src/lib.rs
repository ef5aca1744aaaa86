//! A delimiter and string checker reporting through fret sessions.
//!
//! Checks that `()`, `[]` and `{}` balance, that string literals close, and
//! flags a couple of style problems along the way. It is deliberately small:
//! its job is to drive a [`fret_diagnostic::Session`] the way a real parser
//! would, with anchors taken from the live cursor and from earlier matches.
//!
//! ```
//! use fret_check::{check, CheckError};
//! use fret_diagnostic::SessionConfig;
//!
//! let summary = check("f(a[0], {b})", SessionConfig::default()).unwrap();
//! assert_eq!(summary.pairs, 3);
//!
//! let Err(CheckError::Reported(failure)) = check("f(a))", SessionConfig::default()) else {
//!     panic!("expected a reported failure");
//! };
//! assert_eq!(failure.messages(), vec!["unexpected closing `)`"]);
//! ```

mod checker;
mod cursor;
mod error;
mod kinds;
mod options;

pub use checker::CheckSummary;
pub use cursor::{Cursor, Match};
pub use error::CheckError;
pub use kinds::TrailingWhitespace;
pub use options::{Options, OptionsError};

use std::sync::Once;

use fret_diagnostic::SessionConfig;
use fret_ir::Span;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=fret_diagnostic=debug` or `RUST_LOG=fret_check=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Check `source`, reporting through a session built from `config`.
///
/// Succeeds only if nothing at all was reported, worries included.
pub fn check(source: &str, config: SessionConfig) -> Result<CheckSummary, CheckError<'_>> {
    Span::try_from_range(0..source.len())?;
    checker::Checker::new(source, config).run()
}
