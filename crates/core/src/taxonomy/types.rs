//! Canonical account types.

use finstat_shared::types::CanonicalAccountId;
use serde::{Deserialize, Serialize};

/// Well-known sub-category labels used by the statement builders.
///
/// Sub-categories are free-form in the catalogue; these are the values the
/// aggregator partitions on (compared case-insensitively).
pub mod sub_category {
    /// Assets realised within the operating cycle.
    pub const CURRENT_ASSET: &str = "Current Asset";
    /// Long-lived assets.
    pub const NON_CURRENT_ASSET: &str = "Non-Current Asset";
    /// Obligations due within the operating cycle.
    pub const CURRENT_LIABILITY: &str = "Current Liability";
    /// Long-term obligations.
    pub const NON_CURRENT_LIABILITY: &str = "Non-Current Liability";
    /// Owners' equity.
    pub const EQUITY: &str = "Equity";
    /// Revenue from the main business.
    pub const OPERATING_REVENUE: &str = "Operating Revenue";
    /// Revenue outside the main business.
    pub const OTHER_INCOME: &str = "Other Income";
    /// Direct costs of goods or services sold.
    pub const COST_OF_SALES: &str = "Cost of Sales";
    /// Operating expenses.
    pub const OPERATING_EXPENSE: &str = "Operating Expense";
    /// Interest and bank charges.
    pub const FINANCE_COST: &str = "Finance Cost";
    /// Income tax and zakat.
    pub const TAX: &str = "Tax";

    /// Case-insensitive comparison against one of the constants.
    #[must_use]
    pub fn is(value: &str, expected: &str) -> bool {
        value.trim().eq_ignore_ascii_case(expected)
    }
}

/// Top-level IFRS element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    /// Resources controlled by the entity.
    Asset,
    /// Present obligations.
    Liability,
    /// Residual interest.
    Equity,
    /// Income.
    Revenue,
    /// Expenses.
    Expense,
}

impl Category {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown account category: {other}")),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Side on which an account naturally accumulates value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Increases with debits (assets, expenses).
    #[default]
    Debit,
    /// Increases with credits (liabilities, equity, revenue).
    Credit,
}

/// An entry of the master taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAccount {
    /// Account ID.
    pub id: CanonicalAccountId,
    /// Unique account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// IFRS element.
    pub category: Category,
    /// Free-form grouping such as "Current Asset" or "Finance Cost".
    pub sub_category: String,
    /// Financial statement line; the name is used when absent.
    pub statement_line: Option<String>,
    /// Natural side of the account.
    pub normal_balance: NormalBalance,
}

impl CanonicalAccount {
    /// Label under which balances of this account are reported.
    #[must_use]
    pub fn line_label(&self) -> &str {
        self.statement_line
            .as_deref()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Catalogue entry as it appears in the reference file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalAccountRecord {
    /// Unique account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// IFRS element.
    pub category: Category,
    /// Free-form grouping.
    #[serde(default)]
    pub sub_category: String,
    /// Financial statement line.
    #[serde(default, alias = "fs_line")]
    pub statement_line: Option<String>,
    /// Natural side of the account.
    #[serde(default)]
    pub normal_balance: NormalBalance,
}

impl CanonicalAccountRecord {
    /// Assigns an ID and produces the stored account.
    #[must_use]
    pub fn into_account(self) -> CanonicalAccount {
        CanonicalAccount {
            id: CanonicalAccountId::new(),
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category,
            sub_category: self.sub_category.trim().to_string(),
            statement_line: self.statement_line,
            normal_balance: self.normal_balance,
        }
    }
}
