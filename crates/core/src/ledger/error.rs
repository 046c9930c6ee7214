//! Ledger error types.

use finstat_shared::AppError;
use thiserror::Error;

/// Errors that can occur during ledger intake and reads.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A row failed validation.
    #[error("Invalid ledger row {row}: {reason}")]
    InvalidRow {
        /// Zero-based position in the submitted list.
        row: usize,
        /// Why the row was rejected.
        reason: String,
    },

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl LedgerError {
    /// Create an invalid row error.
    #[must_use]
    pub fn invalid_row(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            row,
            reason: reason.into(),
        }
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidRow { .. } => Self::Validation(err.to_string()),
            LedgerError::Repository(_) => Self::Storage(err.to_string()),
        }
    }
}
