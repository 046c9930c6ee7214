//! Classification storage.
//!
//! A run is staged on a copy of the company's rows and swapped in only when
//! every draft has been applied.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use finstat_core::mapping::{
    Classification, ClassificationDraft, ClassificationRepository, MappingError, RunOutcome,
    SourceKey,
};
use finstat_shared::types::{CanonicalAccountId, ClassificationId, CompanyId};

use crate::InMemoryStore;

impl ClassificationRepository for InMemoryStore {
    async fn list_for_company(&self, company_id: CompanyId) -> Result<Vec<Classification>, MappingError> {
        let Some(book) = self.existing_book(company_id) else {
            return Ok(Vec::new());
        };
        Ok(book.read().await.classifications.clone())
    }

    async fn find_by_id(&self, id: ClassificationId) -> Result<Option<Classification>, MappingError> {
        let Some(company_id) = self.classification_index.get(&id).map(|c| *c.value()) else {
            return Ok(None);
        };
        let Some(book) = self.existing_book(company_id) else {
            return Ok(None);
        };

        let book = book.read().await;
        Ok(book.classifications.iter().find(|c| c.id == id).cloned())
    }

    async fn apply_run(
        &self,
        company_id: CompanyId,
        drafts: Vec<ClassificationDraft>,
    ) -> Result<RunOutcome, MappingError> {
        let book = self.book(company_id);
        let mut book = book.write().await;
        let now = Utc::now();

        let mut staged = book.classifications.clone();
        let mut positions: HashMap<SourceKey, usize> = staged
            .iter()
            .enumerate()
            .map(|(pos, row)| (row.key(), pos))
            .collect();
        let mut seen = HashSet::new();
        let mut outcome = RunOutcome::default();
        let mut inserted = Vec::new();

        for draft in drafts {
            let key = draft.key();
            if !seen.insert(key.clone()) {
                return Err(MappingError::DuplicateSource(key.to_string()));
            }

            match positions.get(&key).copied() {
                Some(pos) if staged[pos].is_manual() => outcome.skipped_manual.push(key),
                Some(pos) => {
                    staged[pos].apply_draft(draft, now);
                    outcome.written.push(staged[pos].clone());
                }
                None => {
                    let row = Classification::from_draft(company_id, draft, now);
                    inserted.push(row.id);
                    outcome.written.push(row.clone());
                    positions.insert(key, staged.len());
                    staged.push(row);
                }
            }
        }

        book.classifications = staged;
        for id in inserted {
            self.classification_index.insert(id, company_id);
        }

        tracing::debug!(
            %company_id,
            written = outcome.written.len(),
            skipped_manual = outcome.skipped_manual.len(),
            "classification run applied"
        );
        Ok(outcome)
    }

    async fn set_manual(
        &self,
        id: ClassificationId,
        target: CanonicalAccountId,
    ) -> Result<Option<Classification>, MappingError> {
        let Some(company_id) = self.classification_index.get(&id).map(|c| *c.value()) else {
            return Ok(None);
        };
        let Some(book) = self.existing_book(company_id) else {
            return Ok(None);
        };

        let mut book = book.write().await;
        let Some(row) = book.classifications.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        row.set_manual(target, Utc::now());
        Ok(Some(row.clone()))
    }
}
