//! Ledger entry storage.

use finstat_core::ledger::{LedgerEntry, LedgerError, LedgerRecord, LedgerRepository};
use finstat_shared::types::{CompanyId, UploadId};

use crate::InMemoryStore;

impl LedgerRepository for InMemoryStore {
    async fn append(
        &self,
        company_id: CompanyId,
        upload_id: UploadId,
        records: Vec<LedgerRecord>,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        let entries: Vec<LedgerEntry> = records
            .into_iter()
            .map(|record| LedgerEntry::from_record(company_id, upload_id, record))
            .collect();

        let book = self.book(company_id);
        let mut book = book.write().await;
        book.entries.extend(entries.iter().cloned());

        tracing::debug!(
            %company_id,
            %upload_id,
            appended = entries.len(),
            total = book.entries.len(),
            "ledger entries appended"
        );
        Ok(entries)
    }

    async fn list_entries(&self, company_id: CompanyId) -> Result<Vec<LedgerEntry>, LedgerError> {
        let Some(book) = self.existing_book(company_id) else {
            return Ok(Vec::new());
        };
        Ok(book.read().await.entries.clone())
    }
}
