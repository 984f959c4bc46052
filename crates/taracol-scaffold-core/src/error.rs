//! Unified error handling for Taracol Scaffold Core.
//!
//! Wraps domain and application errors with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Errors from the domain layer (invalid names, malformed blueprints).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, rendering).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
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
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn filesystem_errors_are_categorised() {
        let err: ScaffoldError = ApplicationError::FilesystemError {
            path: PathBuf::from("/ro/demo"),
            reason: "Permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert!(err.suggestions().iter().any(|s| s.contains("/ro/demo")));
    }

    #[test]
    fn invalid_name_is_validation() {
        let err: ScaffoldError = DomainError::InvalidProjectName {
            name: "".into(),
            reason: "name cannot be empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("Invalid project name"));
    }
}
