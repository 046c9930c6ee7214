//! Ledger rows as received and as stored.

use finstat_shared::types::{CompanyId, LedgerEntryId, UploadId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trial-balance row as supplied by the file parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Source account code, possibly empty.
    #[serde(default)]
    pub account_code: String,
    /// Source account name, possibly empty.
    #[serde(default)]
    pub account_name: String,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
    /// Signed net balance; `debit - credit` when absent.
    #[serde(default)]
    pub balance: Option<Decimal>,
    /// Account type column of the origin file, if any.
    #[serde(default)]
    pub type_hint: Option<String>,
}

impl LedgerRecord {
    /// Creates a record with the balance left to default.
    #[must_use]
    pub fn new(
        account_code: impl Into<String>,
        account_name: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            account_name: account_name.into(),
            debit,
            credit,
            balance: None,
            type_hint: None,
        }
    }

    /// Sets the type hint.
    #[must_use]
    pub fn with_type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }

    /// Sets an explicit balance.
    #[must_use]
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Identity used for deduplication: the code, or the name when the
    /// code is empty.
    #[must_use]
    pub fn identity(&self) -> &str {
        if self.account_code.is_empty() {
            &self.account_name
        } else {
            &self.account_code
        }
    }

    /// Explicit balance or `debit - credit`.
    #[must_use]
    pub fn net_balance(&self) -> Decimal {
        self.balance.unwrap_or(self.debit - self.credit)
    }
}

/// A persisted ledger row. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Entry ID.
    pub id: LedgerEntryId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Upload the row arrived with.
    pub upload_id: UploadId,
    /// Source account code.
    pub account_code: String,
    /// Source account name.
    pub account_name: String,
    /// Debit amount, never negative once validated.
    pub debit: Decimal,
    /// Credit amount, never negative once validated.
    pub credit: Decimal,
    /// Signed net balance.
    pub balance: Decimal,
    /// Account type column of the origin file, if any.
    pub type_hint: Option<String>,
}

impl LedgerEntry {
    /// Materializes a normalized record.
    #[must_use]
    pub fn from_record(company_id: CompanyId, upload_id: UploadId, record: LedgerRecord) -> Self {
        let balance = record.net_balance();
        Self {
            id: LedgerEntryId::new(),
            company_id,
            upload_id,
            account_code: record.account_code,
            account_name: record.account_name,
            debit: record.debit,
            credit: record.credit,
            balance,
            type_hint: record.type_hint,
        }
    }

    /// Returns true if either amount column is negative.
    #[must_use]
    pub fn has_negative_amount(&self) -> bool {
        self.debit < Decimal::ZERO || self.credit < Decimal::ZERO
    }
}
