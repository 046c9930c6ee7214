//! Shared state behind the repositories.

use std::sync::Arc;

use dashmap::DashMap;
use finstat_core::ledger::LedgerEntry;
use finstat_core::mapping::Classification;
use finstat_core::taxonomy::CanonicalAccount;
use finstat_shared::types::{ClassificationId, CompanyId};
use tokio::sync::RwLock;

/// Ledger entries and classifications of one company.
#[derive(Debug, Default)]
pub(crate) struct CompanyBook {
    pub(crate) entries: Vec<LedgerEntry>,
    pub(crate) classifications: Vec<Classification>,
}

/// Process-local store implementing the taxonomy, ledger and
/// classification repositories.
///
/// Each company owns a lock; holding its write half is the company write
/// scope. Different companies never contend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub(crate) taxonomy: RwLock<Vec<CanonicalAccount>>,
    pub(crate) companies: DashMap<CompanyId, Arc<RwLock<CompanyBook>>>,
    pub(crate) classification_index: DashMap<ClassificationId, CompanyId>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Book of a company, created on first use.
    ///
    /// The map guard is released before the caller awaits the lock.
    pub(crate) fn book(&self, company_id: CompanyId) -> Arc<RwLock<CompanyBook>> {
        self.companies.entry(company_id).or_default().value().clone()
    }

    /// Book of a company, if it was ever written.
    pub(crate) fn existing_book(&self, company_id: CompanyId) -> Option<Arc<RwLock<CompanyBook>>> {
        self.companies
            .get(&company_id)
            .map(|book| Arc::clone(book.value()))
    }
}
