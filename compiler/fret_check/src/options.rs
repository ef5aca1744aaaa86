//! Command-line options for `fret-check`.

use std::path::PathBuf;

use fret_diagnostic::emitter::ColorMode;
use fret_diagnostic::ledger::DEFAULT_LIMIT;
use fret_diagnostic::SessionConfig;

/// Invalid command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid limit `{0}`: expected a positive integer")]
    InvalidLimit(String),
    #[error("invalid color mode `{0}`: expected auto, always, or never")]
    InvalidColor(String),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub limit: usize,
    pub color: ColorMode,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut path = None;
        let mut limit = DEFAULT_LIMIT;
        let mut color = ColorMode::Auto;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--limit=") {
                limit = match value.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(OptionsError::InvalidLimit(value.to_string())),
                };
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = match value {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(OptionsError::InvalidColor(value.to_string())),
                };
            } else if arg.starts_with('-') {
                return Err(OptionsError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(OptionsError::UnexpectedArgument(arg.clone()));
            }
        }

        Ok(Options {
            path: path.ok_or(OptionsError::MissingPath)?,
            limit,
            color,
        })
    }

    /// Session configuration for checking the file these options name.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_filename(self.path.display().to_string())
            .with_limit(self.limit)
    }
}
