//! Taxonomy error types.

use finstat_shared::AppError;
use thiserror::Error;

/// Errors raised while loading or reading the master taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Reference file could not be parsed.
    #[error("invalid taxonomy data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reference file could not be read.
    #[error("cannot read taxonomy file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Two catalogue entries share a code.
    #[error("duplicate canonical account code: {0}")]
    DuplicateCode(String),

    /// Catalogue entry without a code or name.
    #[error("canonical account at position {0} has an empty code or name")]
    IncompleteEntry(usize),

    /// The taxonomy has not been initialized yet.
    #[error("master taxonomy is not loaded")]
    NotLoaded,

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl TaxonomyError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }
}

impl From<TaxonomyError> for AppError {
    fn from(err: TaxonomyError) -> Self {
        match err {
            TaxonomyError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            TaxonomyError::Parse(_) | TaxonomyError::IncompleteEntry(_) => {
                Self::Validation(err.to_string())
            }
            TaxonomyError::Repository(_) => Self::Storage(err.to_string()),
            TaxonomyError::Io { .. } | TaxonomyError::NotLoaded => Self::Internal(err.to_string()),
        }
    }
}
