//! Data-access boundary for ledger entries.

use std::future::Future;

use finstat_shared::types::{CompanyId, UploadId};

use super::entry::{LedgerEntry, LedgerRecord};
use super::error::LedgerError;

/// Repository trait for ledger persistence.
///
/// This trait is implemented by the store crate.
pub trait LedgerRepository: Send + Sync {
    /// Appends normalized records under an upload and returns the stored entries.
    fn append(
        &self,
        company_id: CompanyId,
        upload_id: UploadId,
        records: Vec<LedgerRecord>,
    ) -> impl Future<Output = Result<Vec<LedgerEntry>, LedgerError>> + Send;

    /// All entries of a company, in insertion order.
    fn list_entries(
        &self,
        company_id: CompanyId,
    ) -> impl Future<Output = Result<Vec<LedgerEntry>, LedgerError>> + Send;
}
