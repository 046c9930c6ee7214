//! Master taxonomy storage.

use finstat_core::taxonomy::{CanonicalAccount, TaxonomyError, TaxonomyRepository};
use finstat_shared::types::CanonicalAccountId;

use crate::InMemoryStore;

impl TaxonomyRepository for InMemoryStore {
    async fn count(&self) -> Result<usize, TaxonomyError> {
        Ok(self.taxonomy.read().await.len())
    }

    async fn insert_if_empty(&self, accounts: Vec<CanonicalAccount>) -> Result<bool, TaxonomyError> {
        let mut stored = self.taxonomy.write().await;
        if !stored.is_empty() {
            return Ok(false);
        }

        tracing::debug!(accounts = accounts.len(), "storing master taxonomy");
        *stored = accounts;
        Ok(true)
    }

    async fn list_all(&self) -> Result<Vec<CanonicalAccount>, TaxonomyError> {
        Ok(self.taxonomy.read().await.clone())
    }

    async fn find_by_id(&self, id: CanonicalAccountId) -> Result<Option<CanonicalAccount>, TaxonomyError> {
        Ok(self
            .taxonomy
            .read()
            .await
            .iter()
            .find(|account| account.id == id)
            .cloned())
    }
}
