//! Mapping error types.

use finstat_shared::AppError;
use finstat_shared::types::{CanonicalAccountId, ClassificationId};
use thiserror::Error;

/// Errors that can occur while reading or writing classifications.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Classification not found.
    #[error("Classification not found: {0}")]
    ClassificationNotFound(ClassificationId),

    /// Canonical account not found.
    #[error("Canonical account not found: {0}")]
    CanonicalAccountNotFound(CanonicalAccountId),

    /// A run carried two drafts for the same source account.
    #[error("Duplicate source account in classification run: {0}")]
    DuplicateSource(String),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl MappingError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }

    /// Returns true if this error indicates a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClassificationNotFound(_) | Self::CanonicalAccountNotFound(_)
        )
    }
}

impl From<MappingError> for AppError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::ClassificationNotFound(_) | MappingError::CanonicalAccountNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            MappingError::DuplicateSource(_) => Self::Conflict(err.to_string()),
            MappingError::Repository(_) => Self::Storage(err.to_string()),
        }
    }
}
