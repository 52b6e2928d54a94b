use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-surface them in several places)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A repository URL was supplied but cannot be parsed into an
    /// organization and project pair.
    #[error("repository URL '{url}' is not a recognizable repository reference: {reason}")]
    UrlParse { url: String, reason: String },

    /// An unknown project classification string.
    #[error("unknown project classification '{value}'")]
    InvalidClassification { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UrlParse { url, .. } => vec![
                format!("Could not extract organization/project from: {}", url),
                "Expected shapes: git@host:org/repo.git or https://host/org/repo".into(),
            ],
            Self::InvalidClassification { value } => vec![
                format!("'{}' is not a project classification", value),
                "Valid values: library, bundle, application".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UrlParse { .. } | Self::InvalidClassification { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
