//! Report error types.

use finstat_shared::AppError;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::mapping::MappingError;
use crate::taxonomy::TaxonomyError;

/// Errors that can occur during statement generation.
///
/// Malformed rows and zero denominators never surface here; only missing
/// reference data and repository failures do.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Taxonomy unavailable.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// Ledger read failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Classification read failed.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Taxonomy(e) => e.into(),
            ReportError::Ledger(e) => e.into(),
            ReportError::Mapping(e) => e.into(),
        }
    }
}
