//! Taxonomy initialization and lookup.

use std::sync::Arc;

use super::catalogue::{Taxonomy, TaxonomySource};
use super::error::TaxonomyError;
use super::repository::TaxonomyRepository;
use super::types::CanonicalAccount;

/// Outcome of [`TaxonomyService::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyLoad {
    /// The catalogue was inserted with this many accounts.
    Loaded(usize),
    /// The repository already held this many accounts; nothing was written.
    AlreadyPresent(usize),
}

/// Service owning the one-time load of the master taxonomy.
pub struct TaxonomyService<R: TaxonomyRepository> {
    repo: Arc<R>,
}

impl<R: TaxonomyRepository> TaxonomyService<R> {
    /// Create a new taxonomy service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Loads the catalogue into the repository unless it is already populated.
    ///
    /// Repeated calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or validated, or if the
    /// repository fails.
    pub async fn initialize(&self, source: &TaxonomySource) -> Result<TaxonomyLoad, TaxonomyError> {
        let existing = self.repo.count().await?;
        if existing > 0 {
            tracing::debug!(accounts = existing, "master taxonomy already loaded");
            return Ok(TaxonomyLoad::AlreadyPresent(existing));
        }

        let taxonomy = Taxonomy::from_source(source)?;
        let count = taxonomy.len();

        if self.repo.insert_if_empty(taxonomy.into_accounts()).await? {
            tracing::info!(accounts = count, ?source, "master taxonomy loaded");
            Ok(TaxonomyLoad::Loaded(count))
        } else {
            let existing = self.repo.count().await?;
            tracing::debug!(accounts = existing, "master taxonomy loaded concurrently");
            Ok(TaxonomyLoad::AlreadyPresent(existing))
        }
    }

    /// Canonical accounts sorted by code.
    pub async fn list_canonical_accounts(&self) -> Result<Vec<CanonicalAccount>, TaxonomyError> {
        let mut accounts = self.repo.list_all().await?;
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(accounts)
    }
}

/// Reads the stored catalogue from any repository.
///
/// # Errors
///
/// Returns [`TaxonomyError::NotLoaded`] if the repository is empty.
pub async fn load_taxonomy<R: TaxonomyRepository>(repo: &R) -> Result<Taxonomy, TaxonomyError> {
    let accounts = repo.list_all().await?;
    if accounts.is_empty() {
        return Err(TaxonomyError::NotLoaded);
    }
    Ok(Taxonomy::from_accounts(accounts))
}
