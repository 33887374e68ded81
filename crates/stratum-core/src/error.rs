//! Unified error handling for Stratum Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stratum Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StratumError {
    /// Errors from the domain layer (name and request rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and registry conflicts).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StratumError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A name or request failed validation before anything was written.
    Validation,
    /// The request collides with existing project state.
    Conflict,
    /// The filesystem or the module initializer failed.
    Io,
    Internal,
}

/// Convenient result type alias.
pub type StratumResult<T> = Result<T, StratumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err: StratumError = DomainError::NoUseCases.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "No use cases found");
    }

    #[test]
    fn duplicate_use_case_is_conflict_and_suggests_force() {
        let err: StratumError = ApplicationError::UseCaseAlreadyExists {
            use_case: "checkout".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("-f")));
    }
}
