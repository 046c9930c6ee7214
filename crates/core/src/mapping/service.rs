//! Mapping review and manual override service.

use std::sync::Arc;

use finstat_shared::types::{CanonicalAccountId, ClassificationId, CompanyId, PageRequest, PageResponse};

use super::error::MappingError;
use super::repository::ClassificationRepository;
use super::types::{Classification, MappingView};
use crate::taxonomy::{CanonicalAccount, Taxonomy, TaxonomyRepository};

/// Service backing the mapping review screen.
pub struct MappingService<M: ClassificationRepository, T: TaxonomyRepository> {
    classifications: Arc<M>,
    taxonomy: Arc<T>,
}

impl<M: ClassificationRepository, T: TaxonomyRepository> MappingService<M, T> {
    /// Create a new mapping service.
    #[must_use]
    pub fn new(classifications: Arc<M>, taxonomy: Arc<T>) -> Self {
        Self {
            classifications,
            taxonomy,
        }
    }

    /// Points a classification at a canonical account as a manual override.
    ///
    /// Subsequent classification runs leave the row untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canonical account does not exist
    /// - The classification does not exist
    /// - A repository fails
    pub async fn set_manual(
        &self,
        id: ClassificationId,
        canonical_account_id: CanonicalAccountId,
    ) -> Result<Classification, MappingError> {
        let canonical = self
            .taxonomy
            .find_by_id(canonical_account_id)
            .await
            .map_err(|e| MappingError::repository(e.to_string()))?;
        if canonical.is_none() {
            return Err(MappingError::CanonicalAccountNotFound(canonical_account_id));
        }

        let updated = self
            .classifications
            .set_manual(id, canonical_account_id)
            .await?
            .ok_or(MappingError::ClassificationNotFound(id))?;

        tracing::info!(
            classification_id = %id,
            company_id = %updated.company_id,
            %canonical_account_id,
            "manual classification override"
        );

        Ok(updated)
    }

    /// Lists a company's classifications joined with their canonical
    /// account, ordered by source code then name.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails.
    pub async fn list_mappings(
        &self,
        company_id: CompanyId,
        page: PageRequest,
    ) -> Result<PageResponse<MappingView>, MappingError> {
        let mut rows = self.classifications.list_for_company(company_id).await?;
        rows.sort_by(|a, b| {
            a.source_code
                .cmp(&b.source_code)
                .then_with(|| a.source_name.cmp(&b.source_name))
        });

        let taxonomy = Taxonomy::from_accounts(
            self.taxonomy
                .list_all()
                .await
                .map_err(|e| MappingError::repository(e.to_string()))?,
        );

        let views = rows
            .into_iter()
            .map(|row| {
                let canonical = row.target_account.and_then(|id| taxonomy.get(id));
                MappingView::new(row, canonical)
            })
            .collect();

        Ok(page.paginate(views))
    }

    /// Canonical accounts sorted by code, for the override picker.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list_canonical_accounts(&self) -> Result<Vec<CanonicalAccount>, MappingError> {
        let taxonomy = Taxonomy::from_accounts(
            self.taxonomy
                .list_all()
                .await
                .map_err(|e| MappingError::repository(e.to_string()))?,
        );
        Ok(taxonomy.into_accounts())
    }
}
