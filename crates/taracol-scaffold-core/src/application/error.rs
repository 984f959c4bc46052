//! Application layer errors.
//!
//! These errors represent failures in orchestration, not blueprint rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materialising a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Blueprint rendering failed.
    #[error("Blueprint rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state could not be locked.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Re-running is safe: existing directories and files are reused".into(),
            ],
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "This is likely a bug in the built-in blueprint".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
