//! Ledger intake service.

use std::sync::Arc;

use finstat_shared::types::{CompanyId, UploadId};
use serde::Serialize;

use super::entry::LedgerRecord;
use super::error::LedgerError;
use super::repository::LedgerRepository;
use super::validation::{RowRejection, normalize_records};

/// Outcome of an intake call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Upload the rows were stored under.
    pub upload_id: UploadId,
    /// Rows written to the ledger.
    pub accepted: usize,
    /// Rows without code and name.
    pub skipped_empty: usize,
    /// Earlier rows replaced by a later row with the same identity.
    pub duplicates_replaced: usize,
    /// Rows rejected by validation.
    pub rejected: Vec<RowRejection>,
}

/// Service normalizing and storing trial-balance uploads.
pub struct IntakeService<L: LedgerRepository> {
    repo: Arc<L>,
}

impl<L: LedgerRepository> IntakeService<L> {
    /// Create a new intake service.
    #[must_use]
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// Normalizes the records and appends them to the company ledger.
    ///
    /// Invalid rows are reported, not raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn ingest(
        &self,
        company_id: CompanyId,
        upload_id: UploadId,
        records: Vec<LedgerRecord>,
    ) -> Result<IngestReport, LedgerError> {
        let submitted = records.len();
        let normalized = normalize_records(records);

        for rejection in &normalized.rejected {
            tracing::warn!(
                %company_id,
                row = rejection.row,
                account_code = %rejection.account_code,
                reason = %rejection.reason,
                "ledger row rejected"
            );
        }

        let stored = self
            .repo
            .append(company_id, upload_id, normalized.records)
            .await?;

        tracing::info!(
            %company_id,
            %upload_id,
            submitted,
            accepted = stored.len(),
            duplicates = normalized.duplicates_replaced,
            rejected = normalized.rejected.len(),
            "ledger upload ingested"
        );

        Ok(IngestReport {
            upload_id,
            accepted: stored.len(),
            skipped_empty: normalized.skipped_empty,
            duplicates_replaced: normalized.duplicates_replaced,
            rejected: normalized.rejected,
        })
    }
}
