//! Ratio service.

use std::sync::Arc;

use finstat_shared::types::CompanyId;

use super::engine::RatioEngine;
use super::types::RatioReport;
use crate::ledger::LedgerRepository;
use crate::mapping::ClassificationRepository;
use crate::reports::{FinancialStatements, ReportError, StatementService};
use crate::taxonomy::TaxonomyRepository;

/// Service computing ratios from freshly built statements.
pub struct RatioService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    statements: Arc<StatementService<L, M, T>>,
}

impl<L, M, T> RatioService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    /// Create a new ratio service.
    #[must_use]
    pub fn new(statements: Arc<StatementService<L, M, T>>) -> Self {
        Self { statements }
    }

    /// The underlying statement service.
    #[must_use]
    pub fn statements(&self) -> &StatementService<L, M, T> {
        &self.statements
    }

    /// Computes ratios from already built statements.
    #[must_use]
    pub fn compute_from(&self, statements: &FinancialStatements) -> RatioReport {
        RatioEngine::new(self.statements.labels())
            .compute(&statements.profit_and_loss, &statements.balance_sheet)
    }

    /// Rebuilds the company statements and computes all ratios.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails.
    pub async fn compute_ratios(&self, company_id: CompanyId) -> Result<RatioReport, ReportError> {
        let statements = self.statements.build_statements(company_id).await?;
        let report = self.compute_from(&statements);

        tracing::debug!(%company_id, ratios = report.ratios().count(), "ratios computed");
        Ok(report)
    }
}
