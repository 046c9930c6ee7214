//! Keyword rule table.

use std::path::Path;

use finstat_shared::config::TaxonomyConfig;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::taxonomy::TaxonomyError;

/// Keyword rules shipped with the crate.
const EMBEDDED_RULES: &str = include_str!("../../data/keyword_rules.json");

/// A phrase pointing at candidate canonical accounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordRule {
    /// Lower-case phrase searched in account names and type hints.
    pub phrase: String,
    /// Expected canonical category.
    pub category: String,
    /// Expected canonical sub-category.
    pub sub_category: String,
    /// Candidate canonical codes, most likely first.
    pub codes: Vec<String>,
}

/// Best keyword hit for one source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// The rule that matched.
    pub rule: &'a KeywordRule,
    /// `len(phrase) / max(len(name), len(hint), 1)`, at least the floor.
    pub score: Decimal,
}

impl KeywordMatch<'_> {
    /// Candidate canonical codes.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.rule.codes
    }
}

/// Ordered phrase table.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    /// Builds a table, lower-casing phrases and dropping empty ones.
    #[must_use]
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| KeywordRule {
                phrase: rule.phrase.trim().to_lowercase(),
                ..rule
            })
            .filter(|rule| !rule.phrase.is_empty())
            .collect();
        Self { rules }
    }

    /// Parses a JSON array of rules.
    pub fn from_json_str(raw: &str) -> Result<Self, TaxonomyError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    /// The table embedded in the crate.
    pub fn embedded() -> Result<Self, TaxonomyError> {
        Self::from_json_str(EMBEDDED_RULES)
    }

    /// Reads a rule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the configured rule file, or the embedded table.
    pub fn from_config(config: &TaxonomyConfig) -> Result<Self, TaxonomyError> {
        match config.keyword_rules_path.as_deref() {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// All rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Finds the longest phrase contained in the lower-cased name or hint.
    ///
    /// Ties go to the earlier rule.
    #[must_use]
    pub fn best_match(&self, name: &str, hint: &str, floor: Decimal) -> Option<KeywordMatch<'_>> {
        let best = self
            .rules
            .iter()
            .filter(|rule| name.contains(&rule.phrase) || hint.contains(&rule.phrase))
            .fold(None::<&KeywordRule>, |best, rule| match best {
                Some(current) if current.phrase.chars().count() >= rule.phrase.chars().count() => {
                    Some(current)
                }
                _ => Some(rule),
            })?;

        let denominator = name.chars().count().max(hint.chars().count()).max(1);
        let raw = Decimal::from(best.phrase.chars().count()) / Decimal::from(denominator);

        Some(KeywordMatch {
            rule: best,
            score: raw.max(floor),
        })
    }
}
