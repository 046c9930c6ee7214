//! Classification domain types.

use chrono::{DateTime, Utc};
use finstat_shared::types::{CanonicalAccountId, ClassificationId, CompanyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::taxonomy::{CanonicalAccount, Category};

/// Identity of a source account within a company.
///
/// The code identifies the account; the name is used only when the code is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceKey {
    /// Keyed by account code.
    Code(String),
    /// Keyed by account name (empty code).
    Name(String),
}

impl SourceKey {
    /// Derives the key from a code and name pair.
    #[must_use]
    pub fn new(code: &str, name: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            Self::Name(name.trim().to_string())
        } else {
            Self::Code(code.to_string())
        }
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "code {code}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

/// Who decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingOrigin {
    /// Produced by the classifier.
    Auto,
    /// Set by a user override.
    Manual,
}

/// Stored classification of one source account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Classification ID.
    pub id: ClassificationId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Source account code.
    pub source_code: String,
    /// Source account name.
    pub source_name: String,
    /// Type hint carried from the origin file or a prior mapping.
    pub source_type_hint: Option<String>,
    /// Canonical account, absent for unclassified rows.
    pub target_account: Option<CanonicalAccountId>,
    /// Whether the target is accepted.
    pub is_classified: bool,
    /// Who decided the classification.
    pub origin: MappingOrigin,
    /// Score of the last automatic decision; absent for manual rows.
    pub confidence: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Classification {
    /// Identity of the source account.
    #[must_use]
    pub fn key(&self) -> SourceKey {
        SourceKey::new(&self.source_code, &self.source_name)
    }

    /// Returns true if the row is a manual override.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.origin == MappingOrigin::Manual
    }

    /// Canonical account usable for aggregation.
    #[must_use]
    pub fn accepted_target(&self) -> Option<CanonicalAccountId> {
        self.target_account.filter(|_| self.is_classified)
    }

    /// Creates a new auto row from a draft.
    #[must_use]
    pub fn from_draft(company_id: CompanyId, draft: ClassificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ClassificationId::new(),
            company_id,
            source_code: draft.source_code,
            source_name: draft.source_name,
            source_type_hint: draft.source_type_hint,
            target_account: draft.target_account,
            is_classified: draft.is_classified,
            origin: MappingOrigin::Auto,
            confidence: draft.confidence,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the automatic decision in place, keeping ID and creation time.
    pub fn apply_draft(&mut self, draft: ClassificationDraft, now: DateTime<Utc>) {
        self.source_name = draft.source_name;
        self.source_type_hint = draft.source_type_hint;
        self.target_account = draft.target_account;
        self.is_classified = draft.is_classified;
        self.origin = MappingOrigin::Auto;
        self.confidence = draft.confidence;
        self.updated_at = now;
    }

    /// Applies a manual override.
    pub fn set_manual(&mut self, target: CanonicalAccountId, now: DateTime<Utc>) {
        self.target_account = Some(target);
        self.is_classified = true;
        self.origin = MappingOrigin::Manual;
        self.confidence = None;
        self.updated_at = now;
    }
}

/// Classifier decision for one source account, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDraft {
    /// Source account code.
    pub source_code: String,
    /// Source account name.
    pub source_name: String,
    /// Type hint used for the decision.
    pub source_type_hint: Option<String>,
    /// Best canonical account, kept only when accepted.
    pub target_account: Option<CanonicalAccountId>,
    /// Whether the confidence reached the acceptance threshold.
    pub is_classified: bool,
    /// Final confidence, rounded to 4 places.
    pub confidence: Option<Decimal>,
}

impl ClassificationDraft {
    /// Identity of the source account.
    #[must_use]
    pub fn key(&self) -> SourceKey {
        SourceKey::new(&self.source_code, &self.source_name)
    }
}

/// Result of an atomic classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Rows inserted or updated.
    pub written: Vec<Classification>,
    /// Drafts discarded because the row is a manual override.
    pub skipped_manual: Vec<SourceKey>,
}

/// Classification joined with its canonical account, for review listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingView {
    /// Classification ID.
    pub id: ClassificationId,
    /// Source account code.
    pub source_code: String,
    /// Source account name.
    pub source_name: String,
    /// Type hint.
    pub source_type_hint: Option<String>,
    /// Whether the target is accepted.
    pub is_classified: bool,
    /// Who decided the classification.
    pub origin: MappingOrigin,
    /// Score of the last automatic decision.
    pub confidence: Option<Decimal>,
    /// Canonical account ID.
    pub canonical_account_id: Option<CanonicalAccountId>,
    /// Canonical account code.
    pub canonical_code: Option<String>,
    /// Canonical account name.
    pub canonical_name: Option<String>,
    /// Canonical account category.
    pub canonical_category: Option<Category>,
}

impl MappingView {
    /// Joins a classification with its canonical account, if resolved.
    #[must_use]
    pub fn new(classification: Classification, canonical: Option<&CanonicalAccount>) -> Self {
        Self {
            id: classification.id,
            source_code: classification.source_code,
            source_name: classification.source_name,
            source_type_hint: classification.source_type_hint,
            is_classified: classification.is_classified,
            origin: classification.origin,
            confidence: classification.confidence,
            canonical_account_id: classification.target_account,
            canonical_code: canonical.map(|account| account.code.clone()),
            canonical_name: canonical.map(|account| account.name.clone()),
            canonical_category: canonical.map(|account| account.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(code: &str, name: &str) -> ClassificationDraft {
        ClassificationDraft {
            source_code: code.to_string(),
            source_name: name.to_string(),
            source_type_hint: None,
            target_account: Some(CanonicalAccountId::new()),
            is_classified: true,
            confidence: Some(dec!(0.8123)),
        }
    }

    #[test]
    fn test_source_key_prefers_code() {
        assert_eq!(SourceKey::new(" 1000 ", "Cash"), SourceKey::Code("1000".into()));
        assert_eq!(SourceKey::new("", " Cash "), SourceKey::Name("Cash".into()));
        assert_ne!(SourceKey::new("1000", "Cash"), SourceKey::new("", "1000"));
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let created = Utc::now();
        let mut row = Classification::from_draft(CompanyId::new(), draft("1000", "Cash"), created);
        let id = row.id;

        let mut update = draft("1000", "Cash at Bank");
        update.is_classified = false;
        update.target_account = None;
        row.apply_draft(update, created + chrono::Duration::seconds(1));

        assert_eq!(row.id, id);
        assert_eq!(row.created_at, created);
        assert!(row.updated_at > created);
        assert_eq!(row.source_name, "Cash at Bank");
        assert_eq!(row.accepted_target(), None);
    }

    #[test]
    fn test_set_manual_clears_confidence() {
        let mut row = Classification::from_draft(CompanyId::new(), draft("1000", "Cash"), Utc::now());
        let target = CanonicalAccountId::new();

        row.set_manual(target, Utc::now());

        assert!(row.is_manual());
        assert!(row.is_classified);
        assert_eq!(row.accepted_target(), Some(target));
        assert_eq!(row.confidence, None);
    }

    #[test]
    fn test_origin_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MappingOrigin::Manual).unwrap(), "\"manual\"");
    }
}
