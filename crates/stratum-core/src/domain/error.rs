// ============================================================================
// domain/error.rs - NAMING AND REQUEST ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI inspects them after logging)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A name contains at least one uppercase character.
    #[error("{label} must be in snake_case")]
    NotSnakeCase { label: &'static str, name: String },

    #[error("{label} cannot be empty")]
    EmptyName { label: &'static str },

    /// A name would escape its parent directory once joined onto a path.
    #[error("{label} '{name}' cannot contain path separators or start with '.'")]
    UnsafeName { label: &'static str, name: String },

    #[error("No use cases found")]
    NoUseCases,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotSnakeCase { name, .. } => vec![
                format!("'{}' contains uppercase characters", name),
                format!("Try: {}", name.to_lowercase()),
            ],
            Self::EmptyName { label } => {
                vec![format!("Provide a non-empty {}", label.to_lowercase())]
            }
            Self::UnsafeName { .. } => vec![
                "Names become directory and module names".into(),
                "Use lowercase letters, digits and underscores only".into(),
            ],
            Self::NoUseCases => vec!["Pass at least one use case name after the options".into()],
        }
    }
}
