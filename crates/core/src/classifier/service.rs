//! Classification run service.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use finstat_shared::ClassifierConfig;
use finstat_shared::types::CompanyId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::ClassificationError;
use super::keywords::KeywordTable;
use super::matcher::Matcher;
use crate::ledger::{LedgerEntry, LedgerRepository};
use crate::mapping::{Classification, ClassificationDraft, ClassificationRepository, SourceKey};
use crate::taxonomy::{TaxonomyRepository, load_taxonomy};

/// Decimal places kept for stored confidences.
const STORED_CONFIDENCE_DP: u32 = 4;

/// Decimal places reported in run details.
const REPORTED_CONFIDENCE_DP: u32 = 2;

/// Per-account outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationDetail {
    /// Source account code.
    pub source_code: String,
    /// Source account name.
    pub source_name: String,
    /// Matched canonical code, when accepted.
    pub matched_code: Option<String>,
    /// Matched canonical name, when accepted.
    pub matched_name: Option<String>,
    /// Confidence rounded to 2 places.
    pub confidence: Decimal,
    /// Whether the match was accepted.
    pub is_classified: bool,
}

/// Outcome of [`ClassifierService::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    /// Distinct source accounts in the ledger.
    pub total: usize,
    /// Accounts classified after the run, manual overrides included.
    pub classified_count: usize,
    /// Accounts left unclassified.
    pub unclassified_count: usize,
    /// Manual overrides left untouched.
    pub skipped_manual: usize,
    /// Decisions for the accounts processed by this run.
    pub details: Vec<ClassificationDetail>,
}

/// A distinct source account of the ledger.
struct SourceAccount<'a> {
    key: SourceKey,
    entry: &'a LedgerEntry,
}

/// Service classifying a company's source accounts.
pub struct ClassifierService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    ledger: Arc<L>,
    classifications: Arc<M>,
    taxonomy: Arc<T>,
    keywords: Arc<KeywordTable>,
    config: ClassifierConfig,
}

impl<L, M, T> ClassifierService<L, M, T>
where
    L: LedgerRepository,
    M: ClassificationRepository,
    T: TaxonomyRepository,
{
    /// Create a new classifier service.
    #[must_use]
    pub fn new(
        ledger: Arc<L>,
        classifications: Arc<M>,
        taxonomy: Arc<T>,
        keywords: Arc<KeywordTable>,
        config: ClassifierConfig,
    ) -> Self {
        Self {
            ledger,
            classifications,
            taxonomy,
            keywords,
            config,
        }
    }

    /// Classifies every distinct source account of the company ledger.
    ///
    /// Auto rows are replaced in place, manual overrides are left untouched
    /// and unaccepted accounts are stored without a target. All decisions
    /// are applied as one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the taxonomy is not loaded or a repository fails;
    /// in that case nothing is written.
    pub async fn classify(
        &self,
        company_id: CompanyId,
    ) -> Result<ClassificationSummary, ClassificationError> {
        let taxonomy = load_taxonomy(self.taxonomy.as_ref()).await?;
        let entries = self.ledger.list_entries(company_id).await?;
        let existing: HashMap<SourceKey, Classification> = self
            .classifications
            .list_for_company(company_id)
            .await?
            .into_iter()
            .map(|row| (row.key(), row))
            .collect();

        let sources = distinct_sources(&entries);
        let matcher = Matcher::new(&taxonomy, &self.keywords, &self.config);

        let mut skipped_manual = 0;
        let mut drafts = Vec::with_capacity(sources.len());
        let mut details = Vec::with_capacity(sources.len());

        for source in &sources {
            let prior = existing.get(&source.key);
            if prior.is_some_and(|row| row.is_manual() && row.is_classified) {
                skipped_manual += 1;
                continue;
            }

            let hint = prior
                .and_then(|row| row.source_type_hint.clone())
                .or_else(|| source.entry.type_hint.clone());
            let decision = matcher.decide(&source.entry.account_name, hint.as_deref());
            let accepted = decision.is_accepted(&self.config);
            let target = decision.account.filter(|_| accepted);

            tracing::debug!(
                %company_id,
                source = %source.key,
                matched = target.map(|a| a.code.as_str()),
                confidence = %decision.confidence,
                basis = ?decision.basis,
                "source account classified"
            );

            details.push((
                source.key.clone(),
                ClassificationDetail {
                    source_code: source.entry.account_code.clone(),
                    source_name: source.entry.account_name.clone(),
                    matched_code: target.map(|a| a.code.clone()),
                    matched_name: target.map(|a| a.name.clone()),
                    confidence: decision.confidence.round_dp(REPORTED_CONFIDENCE_DP),
                    is_classified: accepted,
                },
            ));
            drafts.push(ClassificationDraft {
                source_code: source.entry.account_code.clone(),
                source_name: source.entry.account_name.clone(),
                source_type_hint: hint,
                target_account: target.map(|a| a.id),
                is_classified: accepted,
                confidence: Some(decision.confidence.round_dp(STORED_CONFIDENCE_DP)),
            });
        }

        let outcome = self.classifications.apply_run(company_id, drafts).await?;

        // Rows switched to manual between the read and the write.
        let raced: HashSet<&SourceKey> = outcome.skipped_manual.iter().collect();
        skipped_manual += raced.len();
        let details: Vec<ClassificationDetail> = details
            .into_iter()
            .filter(|(key, _)| !raced.contains(key))
            .map(|(_, detail)| detail)
            .collect();

        let auto_classified = details.iter().filter(|d| d.is_classified).count();
        let summary = ClassificationSummary {
            total: sources.len(),
            classified_count: auto_classified + skipped_manual,
            unclassified_count: details.len() - auto_classified,
            skipped_manual,
            details,
        };

        tracing::info!(
            %company_id,
            total = summary.total,
            classified = summary.classified_count,
            unclassified = summary.unclassified_count,
            skipped_manual = summary.skipped_manual,
            written = outcome.written.len(),
            "classification run applied"
        );

        Ok(summary)
    }
}

/// Distinct source accounts in ledger order; the first entry of each key
/// supplies code, name and hint.
fn distinct_sources(entries: &[LedgerEntry]) -> Vec<SourceAccount<'_>> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter_map(|entry| {
            let key = SourceKey::new(&entry.account_code, &entry.account_name);
            seen.insert(key.clone()).then_some(SourceAccount { key, entry })
        })
        .collect()
}
