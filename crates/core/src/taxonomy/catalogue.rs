//! In-memory view of the master taxonomy.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use finstat_shared::config::TaxonomyConfig;
use finstat_shared::types::CanonicalAccountId;

use super::error::TaxonomyError;
use super::types::{CanonicalAccount, CanonicalAccountRecord};

/// IFRS chart of accounts shipped with the crate.
const EMBEDDED_CHART: &str = include_str!("../../data/ifrs_chart_of_accounts.json");

/// Where the catalogue is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomySource {
    /// The chart embedded in the binary.
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
}

impl TaxonomySource {
    /// Selects the source named by configuration.
    #[must_use]
    pub fn from_config(config: &TaxonomyConfig) -> Self {
        config
            .chart_path
            .as_deref()
            .map_or(Self::Embedded, |path| Self::File(PathBuf::from(path)))
    }

    /// Parses the catalogue records from this source.
    pub fn read_records(&self) -> Result<Vec<CanonicalAccountRecord>, TaxonomyError> {
        match self {
            Self::Embedded => Ok(serde_json::from_str(EMBEDDED_CHART)?),
            Self::File(path) => {
                let raw = read_file(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String, TaxonomyError> {
    std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read-only snapshot of the canonical accounts, sorted by code.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    accounts: Vec<CanonicalAccount>,
    by_code: HashMap<String, usize>,
    by_id: HashMap<CanonicalAccountId, usize>,
}

impl Taxonomy {
    /// Builds a snapshot from stored accounts.
    #[must_use]
    pub fn from_accounts(mut accounts: Vec<CanonicalAccount>) -> Self {
        accounts.sort_by(|a, b| a.code.cmp(&b.code));

        let by_code = accounts
            .iter()
            .enumerate()
            .map(|(idx, account)| (account.code.clone(), idx))
            .collect();
        let by_id = accounts
            .iter()
            .enumerate()
            .map(|(idx, account)| (account.id, idx))
            .collect();

        Self {
            accounts,
            by_code,
            by_id,
        }
    }

    /// Validates catalogue records and assigns IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has an empty code or name, or if two
    /// records share a code.
    pub fn from_records(records: Vec<CanonicalAccountRecord>) -> Result<Self, TaxonomyError> {
        let mut seen = HashMap::with_capacity(records.len());
        let mut accounts = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            let account = record.into_account();
            if account.code.is_empty() || account.name.is_empty() {
                return Err(TaxonomyError::IncompleteEntry(position));
            }
            if seen.insert(account.code.clone(), position).is_some() {
                return Err(TaxonomyError::DuplicateCode(account.code));
            }
            accounts.push(account);
        }

        Ok(Self::from_accounts(accounts))
    }

    /// Parses and validates a JSON array of catalogue records.
    pub fn from_json_str(raw: &str) -> Result<Self, TaxonomyError> {
        Self::from_records(serde_json::from_str(raw)?)
    }

    /// The chart embedded in the crate.
    pub fn embedded() -> Result<Self, TaxonomyError> {
        Self::from_json_str(EMBEDDED_CHART)
    }

    /// Reads and validates a catalogue file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }

    /// Reads and validates the catalogue from a source.
    pub fn from_source(source: &TaxonomySource) -> Result<Self, TaxonomyError> {
        Self::from_records(source.read_records()?)
    }

    /// Looks up an account by ID.
    #[must_use]
    pub fn get(&self, id: CanonicalAccountId) -> Option<&CanonicalAccount> {
        self.by_id.get(&id).map(|&idx| &self.accounts[idx])
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&CanonicalAccount> {
        self.by_code.get(code.trim()).map(|&idx| &self.accounts[idx])
    }

    /// All accounts, sorted by code.
    #[must_use]
    pub fn accounts(&self) -> &[CanonicalAccount] {
        &self.accounts
    }

    /// Consumes the snapshot.
    #[must_use]
    pub fn into_accounts(self) -> Vec<CanonicalAccount> {
        self.accounts
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true when no account is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::types::{Category, NormalBalance, sub_category};

    #[test]
    fn test_embedded_chart_is_valid() {
        let taxonomy = Taxonomy::embedded().unwrap();

        assert!(taxonomy.len() > 40);
        let cash = taxonomy.by_code("1010").unwrap();
        assert_eq!(cash.name, "Cash and Cash Equivalents");
        assert_eq!(cash.category, Category::Asset);
        assert!(sub_category::is(&cash.sub_category, sub_category::CURRENT_ASSET));

        let revenue = taxonomy.by_code("6010").unwrap();
        assert_eq!(revenue.normal_balance, NormalBalance::Credit);
    }

    #[test]
    fn test_accounts_sorted_by_code() {
        let taxonomy = Taxonomy::from_json_str(
            r#"[
                {"code": "6000", "name": "Revenue", "category": "Revenue", "normal_balance": "credit"},
                {"code": "1000", "name": "Cash", "category": "Asset"}
            ]"#,
        )
        .unwrap();

        let codes: Vec<&str> = taxonomy.accounts().iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["1000", "6000"]);

        let id = taxonomy.accounts()[1].id;
        assert_eq!(taxonomy.get(id).unwrap().code, "6000");
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = Taxonomy::from_json_str(
            r#"[
                {"code": "1000", "name": "Cash", "category": "Asset"},
                {"code": "1000", "name": "Bank", "category": "Asset"}
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(err, TaxonomyError::DuplicateCode(code) if code == "1000"));
    }

    #[test]
    fn test_incomplete_entry_rejected() {
        let err = Taxonomy::from_json_str(
            r#"[
                {"code": "1000", "name": "Cash", "category": "Asset"},
                {"code": " ", "name": "Bank", "category": "Asset"}
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(err, TaxonomyError::IncompleteEntry(1)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Taxonomy::from_path("/nonexistent/chart.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chart.json"));
    }

    #[test]
    fn test_source_from_config() {
        let config = TaxonomyConfig::default();
        assert_eq!(TaxonomySource::from_config(&config), TaxonomySource::Embedded);

        let config = TaxonomyConfig {
            chart_path: Some("chart.json".to_string()),
            keyword_rules_path: None,
        };
        assert_eq!(
            TaxonomySource::from_config(&config),
            TaxonomySource::File(PathBuf::from("chart.json"))
        );
    }
}
