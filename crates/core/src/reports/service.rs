//! Report generation service.

use std::sync::Arc;

use finstat_shared::types::CompanyId;

use super::builder::StatementBuilder;
use super::error::ReportError;
use super::grouping::group_balances;
use super::types::FinancialStatements;
use crate::labels::{KeywordLabelClassifier, LineLabelClassifier};
use crate::ledger::LedgerRepository;
use crate::mapping::ClassificationRepository;
use crate::taxonomy::{Taxonomy, TaxonomyRepository};

/// Service generating financial statements from persisted data.
///
/// Every call recomputes from the repositories; nothing is cached.
pub struct StatementService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    ledger: Arc<L>,
    classifications: Arc<M>,
    taxonomy: Arc<T>,
    labels: Arc<dyn LineLabelClassifier>,
}

impl<L, M, T> StatementService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    /// Create a new statement service with the default label rules.
    #[must_use]
    pub fn new(ledger: Arc<L>, classifications: Arc<M>, taxonomy: Arc<T>) -> Self {
        Self::with_labels(ledger, classifications, taxonomy, Arc::new(KeywordLabelClassifier))
    }

    /// Create a new statement service with custom label rules.
    #[must_use]
    pub fn with_labels(
        ledger: Arc<L>,
        classifications: Arc<M>,
        taxonomy: Arc<T>,
        labels: Arc<dyn LineLabelClassifier>,
    ) -> Self {
        Self {
            ledger,
            classifications,
            taxonomy,
            labels,
        }
    }

    /// Label rules used by this service.
    #[must_use]
    pub fn labels(&self) -> &dyn LineLabelClassifier {
        self.labels.as_ref()
    }

    /// Builds the P&L, balance sheet and cash flow of a company.
    ///
    /// An empty ledger or taxonomy yields well-formed zero statements.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository fails.
    pub async fn build_statements(
        &self,
        company_id: CompanyId,
    ) -> Result<FinancialStatements, ReportError> {
        let taxonomy = Taxonomy::from_accounts(self.taxonomy.list_all().await?);
        let entries = self.ledger.list_entries(company_id).await?;
        let classifications = self.classifications.list_for_company(company_id).await?;

        let balances = group_balances(&entries, &classifications, &taxonomy);
        let statements = StatementBuilder::new(self.labels.as_ref()).build(&balances);

        tracing::debug!(
            %company_id,
            entries = entries.len(),
            lines = balances.len(),
            net_profit = %statements.profit_and_loss.summary.net_profit,
            total_assets = %statements.balance_sheet.summary.total_assets,
            "financial statements built"
        );

        Ok(statements)
    }

    /// Returns true if the company has at least one ledger entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn has_entries(&self, company_id: CompanyId) -> Result<bool, ReportError> {
        Ok(!self.ledger.list_entries(company_id).await?.is_empty())
    }
}
