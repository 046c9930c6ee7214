//! Data-access boundary for classifications.

use std::future::Future;

use finstat_shared::types::{CanonicalAccountId, ClassificationId, CompanyId};

use super::error::MappingError;
use super::types::{Classification, ClassificationDraft, RunOutcome};

/// Repository trait for classification persistence.
///
/// Writes for one company are serialized by the implementation.
pub trait ClassificationRepository: Send + Sync {
    /// All classifications of a company.
    fn list_for_company(
        &self,
        company_id: CompanyId,
    ) -> impl Future<Output = Result<Vec<Classification>, MappingError>> + Send;

    /// Find a classification by ID.
    fn find_by_id(
        &self,
        id: ClassificationId,
    ) -> impl Future<Output = Result<Option<Classification>, MappingError>> + Send;

    /// Applies a classification run as one unit.
    ///
    /// Under the company write scope, each draft updates the auto row with
    /// the same source key in place or inserts a new one. Drafts whose row
    /// is a manual override are skipped. Either every draft is applied or
    /// none is.
    fn apply_run(
        &self,
        company_id: CompanyId,
        drafts: Vec<ClassificationDraft>,
    ) -> impl Future<Output = Result<RunOutcome, MappingError>> + Send;

    /// Marks a classification as a manual override of `target`.
    ///
    /// Returns `None` when the classification does not exist.
    fn set_manual(
        &self,
        id: ClassificationId,
        target: CanonicalAccountId,
    ) -> impl Future<Output = Result<Option<Classification>, MappingError>> + Send;
}
