//! Classifier error types.

use finstat_shared::AppError;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::mapping::MappingError;
use crate::taxonomy::TaxonomyError;

/// Errors that can occur during a classification run.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// Taxonomy unavailable.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// Ledger read failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Classification write failed; nothing was applied.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::Taxonomy(e) => e.into(),
            ClassificationError::Ledger(e) => e.into(),
            ClassificationError::Mapping(e) => e.into(),
        }
    }
}
