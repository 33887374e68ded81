//! Application layer errors.
//!
//! These errors represent failures while orchestrating I/O, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffolding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The use case is already listed in the project README and force mode is off.
    #[error("Use case {use_case} already exists.")]
    UseCaseAlreadyExists { use_case: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external module initializer could not create a layer.
    #[error("Module initialisation failed for {path}: {reason}")]
    ModuleInitFailed { path: PathBuf, reason: String },

    /// Shared state lock poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UseCaseAlreadyExists { use_case } => vec![
                format!("'{}' is already listed in README.md", use_case),
                "Use \"-f\" to overwrite existing files.".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ModuleInitFailed { .. } => vec![
                "Ensure cargo is installed and in your PATH".into(),
                "Or pass --no-cargo to write the module skeletons directly".into(),
            ],
            Self::StoreLockError => vec!["This appears to be a bug in Stratum".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UseCaseAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::ModuleInitFailed { .. } => ErrorCategory::Io,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
