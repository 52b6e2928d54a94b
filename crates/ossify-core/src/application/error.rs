//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No usable remote: the working directory is not a repository, or it
    /// has no `origin` remote to read a URL from.
    #[error("could not resolve repository identity for {workdir}: {reason}")]
    IdentityResolution { workdir: PathBuf, reason: String },

    /// An existing tier directory could not be listed. Distinct from tier
    /// non-existence, which the locator treats as a normal outcome.
    #[error("failed to read template tier {path}: {reason}")]
    TierRead { path: PathBuf, reason: String },

    /// A template could not be read, rendered completely, or written.
    #[error("failed to render {destination}: {reason}")]
    Render { destination: PathBuf, reason: String },

    /// Other filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IdentityResolution { workdir, .. } => vec![
                format!("No 'origin' remote found in: {}", workdir.display()),
                "Run inside a clone of the target repository".into(),
                "Or pass the URL explicitly with --repository-url".into(),
            ],
            Self::TierRead { path, .. } => vec![
                format!("Could not list templates under: {}", path.display()),
                "Check directory permissions".into(),
            ],
            Self::Render { destination, .. } => vec![
                format!("Nothing was written to: {}", destination.display()),
                "Check that the template exists and the destination is writable".into(),
                "An unresolved {{PLACEHOLDER}} means the template references a value this tool does not provide".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IdentityResolution { .. } => ErrorCategory::NotFound,
            Self::TierRead { .. } | Self::Render { .. } | Self::Filesystem { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
