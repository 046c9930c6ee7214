//! Per-account classification decision.

use finstat_shared::ClassifierConfig;
use rust_decimal::Decimal;

use super::keywords::KeywordTable;
use super::similarity::{hint_matches, similarity_ratio};
use crate::taxonomy::{CanonicalAccount, Taxonomy};

/// How a decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBasis {
    /// Keyword candidates won over a weak similarity match.
    KeywordFallback,
    /// Best similarity match, boosts included.
    Similarity,
    /// Nothing reached the similarity floor.
    NoMatch,
}

/// Decision for one source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDecision<'a> {
    /// Best canonical account, if any.
    pub account: Option<&'a CanonicalAccount>,
    /// Final confidence in `[0, 1]`.
    pub confidence: Decimal,
    /// How the decision was reached.
    pub basis: MatchBasis,
}

impl MatchDecision<'_> {
    /// Returns true if the confidence reaches the acceptance threshold.
    #[must_use]
    pub fn is_accepted(&self, config: &ClassifierConfig) -> bool {
        self.account.is_some() && self.confidence >= config.accept_threshold
    }
}

struct PreparedAccount<'a> {
    account: &'a CanonicalAccount,
    name: String,
    category: String,
    sub_category: String,
}

/// Classifier over one taxonomy snapshot.
///
/// Canonical names are lower-cased once on construction.
pub struct Matcher<'a> {
    taxonomy: &'a Taxonomy,
    keywords: &'a KeywordTable,
    config: &'a ClassifierConfig,
    prepared: Vec<PreparedAccount<'a>>,
}

impl<'a> Matcher<'a> {
    /// Prepares a matcher for a run.
    #[must_use]
    pub fn new(taxonomy: &'a Taxonomy, keywords: &'a KeywordTable, config: &'a ClassifierConfig) -> Self {
        let prepared = taxonomy
            .accounts()
            .iter()
            .map(|account| PreparedAccount {
                account,
                name: account.name.to_lowercase(),
                category: account.category.as_str().to_lowercase(),
                sub_category: account.sub_category.to_lowercase(),
            })
            .collect();

        Self {
            taxonomy,
            keywords,
            config,
            prepared,
        }
    }

    /// Decides the canonical account for a source account name and hint.
    #[must_use]
    pub fn decide(&self, name: &str, hint: Option<&str>) -> MatchDecision<'a> {
        let name = name.trim().to_lowercase();
        let hint = hint.unwrap_or_default().trim().to_lowercase();

        let keyword = self
            .keywords
            .best_match(&name, &hint, self.config.keyword_floor);
        let candidates = keyword.as_ref().map_or(&[][..], |hit| hit.codes());

        let mut best: Option<&'a CanonicalAccount> = None;
        let mut best_score = Decimal::ZERO;

        for prepared in &self.prepared {
            let mut score = similarity_ratio(&name, &prepared.name);
            if hint_matches(&hint, &prepared.category, &prepared.sub_category) {
                score += self.config.hint_boost;
            }
            if candidates.iter().any(|code| *code == prepared.account.code) {
                score += self.config.candidate_boost;
            }

            if score > best_score {
                best_score = score;
                best = Some(prepared.account);
            }
        }

        if let Some(hit) = &keyword
            && best_score < self.config.keyword_fallback_ceiling
            && let Some(account) = hit.codes().first().and_then(|code| self.taxonomy.by_code(code))
        {
            return MatchDecision {
                account: Some(account),
                confidence: clamp(hit.score.max(self.config.keyword_fallback_confidence)),
                basis: MatchBasis::KeywordFallback,
            };
        }

        match best {
            Some(account) if best_score >= self.config.similarity_floor => MatchDecision {
                account: Some(account),
                confidence: clamp(best_score),
                basis: MatchBasis::Similarity,
            },
            _ => MatchDecision {
                account: None,
                confidence: Decimal::ZERO,
                basis: MatchBasis::NoMatch,
            },
        }
    }
}

fn clamp(score: Decimal) -> Decimal {
    score.clamp(Decimal::ZERO, Decimal::ONE)
}
