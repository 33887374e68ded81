//! CLI errors: everything `main` can turn into an exit code.
//!
//! Core errors pass through unchanged; the CLI adds its own usage, config
//! and I/O failures and decides how each one is shown.

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use stratum_core::error::StratumError;

pub use stratum_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Missing project name or use cases.
    #[error("{message}")]
    Usage { message: String },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] StratumError),

    /// Prompt or working-directory I/O done by the CLI itself.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Usage { .. } => vec!["Use --help for usage information".into()],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use STRATUM_<SECTION>__<KEY>".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { .. } => vec!["Check permissions on the target directory".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Conflict      |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Conflict => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Usage-style errors are shown as `ERROR - <message>` plus the usage text.
    pub fn shows_usage(&self) -> bool {
        self.category() == ErrorCategory::UserError
    }

    /// `ERROR - <message>`, a blank line, then `usage`.
    pub fn format_usage(&self, usage: &str) -> String {
        format!("ERROR - {self}\n\n{usage}\n")
    }

    /// Message, the cause chain when `verbose`, then suggestions.
    ///
    /// Colour is applied only to the labels so the text itself stays
    /// searchable in logs.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let label = |text: &str| {
            if color {
                text.red().bold().to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!("{} {self}\n", label("Error:"));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  caused by: {err}");
                cause = err.source();
            }
        }

        for suggestion in self.suggestions() {
            let hint = if color {
                "hint:".yellow().to_string()
            } else {
                "hint:".to_owned()
            };
            let _ = writeln!(out, "  {hint} {suggestion}");
        }

        if !verbose && self.source().is_some() {
            out.push_str("  (run with -v for the underlying cause)\n");
        }
        out
    }

    /// One event per failure; conflicts and usage mistakes are warnings.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::Conflict => {
                tracing::warn!(?category, error = %self, "Run rejected")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Run failed")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad invocation or a name that fails validation.
    UserError,
    /// The use case is already registered.
    Conflict,
    Configuration,
    /// Filesystem, subprocess or internal failure.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `io::Error` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
