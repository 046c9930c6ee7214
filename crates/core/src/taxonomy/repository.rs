//! Data-access boundary for the master taxonomy.

use std::future::Future;

use finstat_shared::types::CanonicalAccountId;

use super::error::TaxonomyError;
use super::types::CanonicalAccount;

/// Repository trait for canonical account persistence.
///
/// This trait is implemented by the store crate.
pub trait TaxonomyRepository: Send + Sync {
    /// Number of canonical accounts currently stored.
    fn count(&self) -> impl Future<Output = Result<usize, TaxonomyError>> + Send;

    /// Inserts the catalogue only if no account is stored yet.
    ///
    /// Returns `false` when another loader got there first; the check and the
    /// insert must be atomic.
    fn insert_if_empty(
        &self,
        accounts: Vec<CanonicalAccount>,
    ) -> impl Future<Output = Result<bool, TaxonomyError>> + Send;

    /// All canonical accounts.
    fn list_all(&self) -> impl Future<Output = Result<Vec<CanonicalAccount>, TaxonomyError>> + Send;

    /// Find a canonical account by ID.
    fn find_by_id(
        &self,
        id: CanonicalAccountId,
    ) -> impl Future<Output = Result<Option<CanonicalAccount>, TaxonomyError>> + Send;
}
