//! Dashboard service.

use std::sync::Arc;

use finstat_shared::types::CompanyId;

use super::types::{DashboardKpis, DashboardSummary};
use crate::ledger::LedgerRepository;
use crate::mapping::ClassificationRepository;
use crate::ratios::RatioService;
use crate::reports::ReportError;
use crate::taxonomy::TaxonomyRepository;

/// Service assembling the company overview.
pub struct DashboardService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    ratios: Arc<RatioService<L, M, T>>,
}

impl<L, M, T> DashboardService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    /// Create a new dashboard service.
    #[must_use]
    pub fn new(ratios: Arc<RatioService<L, M, T>>) -> Self {
        Self { ratios }
    }

    /// Headline figures of a company, or `has_data: false` without entries.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails.
    pub async fn summary(&self, company_id: CompanyId) -> Result<DashboardSummary, ReportError> {
        let statements = self.ratios.statements();
        if !statements.has_entries(company_id).await? {
            tracing::debug!(%company_id, "dashboard requested without ledger data");
            return Ok(DashboardSummary::empty());
        }

        let built = statements.build_statements(company_id).await?;
        let ratios = self.ratios.compute_from(&built);
        let kpis = DashboardKpis::from_reports(&built, &ratios, statements.labels());

        Ok(DashboardSummary {
            has_data: true,
            kpis: Some(kpis),
        })
    }
}
