//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, NormalBalance};

/// Section names, in statement order.
pub mod section {
    /// Operating revenue.
    pub const REVENUE: &str = "Revenue";
    /// Cost of sales.
    pub const COST_OF_REVENUE: &str = "Cost of Revenue";
    /// Revenue minus cost of revenue.
    pub const GROSS_PROFIT: &str = "Gross Profit";
    /// Operating expenses.
    pub const OPERATING_EXPENSES: &str = "Operating Expenses";
    /// Gross profit minus operating expenses.
    pub const OPERATING_PROFIT: &str = "Operating Profit";
    /// Non-operating income.
    pub const OTHER_INCOME: &str = "Other Income";
    /// Interest and bank charges.
    pub const FINANCE_COSTS: &str = "Finance Costs";
    /// Operating profit plus other income minus finance costs.
    pub const PROFIT_BEFORE_TAX: &str = "Profit Before Tax";
    /// Income tax and zakat.
    pub const TAX_EXPENSE: &str = "Tax Expense";
    /// Profit before tax minus tax.
    pub const NET_PROFIT: &str = "Net Profit";

    /// Current assets.
    pub const CURRENT_ASSETS: &str = "Current Assets";
    /// Non-current assets.
    pub const NON_CURRENT_ASSETS: &str = "Non-Current Assets";
    /// All assets.
    pub const TOTAL_ASSETS: &str = "Total Assets";
    /// Current liabilities.
    pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
    /// Non-current liabilities.
    pub const NON_CURRENT_LIABILITIES: &str = "Non-Current Liabilities";
    /// All liabilities.
    pub const TOTAL_LIABILITIES: &str = "Total Liabilities";
    /// Equity.
    pub const EQUITY: &str = "Equity";
    /// Liabilities plus equity.
    pub const TOTAL_LIABILITIES_AND_EQUITY: &str = "Total Liabilities & Equity";

    /// Cash from operations.
    pub const OPERATING_ACTIVITIES: &str = "Operating Activities";
    /// Cash from investing.
    pub const INVESTING_ACTIVITIES: &str = "Investing Activities";
    /// Cash from financing.
    pub const FINANCING_ACTIVITIES: &str = "Financing Activities";
    /// Sum of all activities.
    pub const NET_CHANGE_IN_CASH: &str = "Net Change in Cash";
}

/// Classified balances summed under one statement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBalance {
    /// Statement line label.
    pub label: String,
    /// Lowest canonical code contributing to the line.
    pub first_code: String,
    /// Category of that account.
    pub category: Category,
    /// Sub-category of that account.
    pub sub_category: String,
    /// Normal balance of that account.
    pub normal_balance: NormalBalance,
    /// Sum of debits.
    pub debit: Decimal,
    /// Sum of credits.
    pub credit: Decimal,
    /// Sum of signed balances.
    pub balance: Decimal,
}

impl LineBalance {
    /// Amount in the direction of the normal balance.
    ///
    /// When both debit and credit are zero the absolute balance is used.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        if self.debit.is_zero() && self.credit.is_zero() {
            return self.balance.abs();
        }
        match self.normal_balance {
            NormalBalance::Credit => self.credit - self.debit,
            NormalBalance::Debit => self.debit - self.credit,
        }
    }
}

/// A labelled amount within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Display label.
    pub label: String,
    /// Amount rounded to 2 places.
    pub amount: Decimal,
}

impl StatementLine {
    /// Creates a line, rounding the amount to 2 places.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount: amount.round_dp(2),
        }
    }
}

/// A statement section.
///
/// Subtotal sections carry no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name.
    pub name: String,
    /// Lines of the section.
    pub items: Vec<StatementLine>,
    /// Sum of the items, or the derived figure for subtotals.
    pub total: Decimal,
    /// Whether the section is a derived subtotal.
    pub is_subtotal: bool,
}

impl Section {
    /// A detail section totalling its items.
    #[must_use]
    pub fn detail(name: &str, items: Vec<StatementLine>) -> Self {
        let total = items.iter().map(|item| item.amount).sum();
        Self {
            name: name.to_string(),
            items,
            total,
            is_subtotal: false,
        }
    }

    /// A subtotal section without items.
    #[must_use]
    pub fn subtotal(name: &str, total: Decimal) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
            total: total.round_dp(2),
            is_subtotal: true,
        }
    }
}

/// Common access to a statement's sections.
pub trait Statement {
    /// Sections in statement order.
    fn sections(&self) -> &[Section];

    /// Finds a section by name.
    fn section(&self, name: &str) -> Option<&Section> {
        self.sections().iter().find(|s| s.name == name)
    }

    /// Lines of every detail section, in order.
    fn lines(&self) -> impl Iterator<Item = &StatementLine> {
        self.sections().iter().flat_map(|s| s.items.iter())
    }
}

/// Headline figures of the P&L.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAndLossSummary {
    /// Operating revenue.
    pub revenue: Decimal,
    /// Cost of sales.
    pub cogs: Decimal,
    /// Revenue minus cost of sales.
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub operating_profit: Decimal,
    /// Non-operating income.
    pub other_income: Decimal,
    /// Finance costs.
    pub finance_costs: Decimal,
    /// Profit before tax.
    pub profit_before_tax: Decimal,
    /// Tax expense.
    pub tax: Decimal,
    /// Net profit.
    pub net_profit: Decimal,
    /// Depreciation and amortization within operating expenses.
    pub depreciation_and_amortization: Decimal,
    /// Operating profit plus depreciation and amortization.
    pub ebitda: Decimal,
}

/// Profit & Loss statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Statement title.
    pub title: String,
    /// Sections in statement order.
    pub sections: Vec<Section>,
    /// Headline figures.
    pub summary: ProfitAndLossSummary,
}

impl Statement for ProfitAndLoss {
    fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Headline figures of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSummary {
    /// Current assets.
    pub total_current_assets: Decimal,
    /// Non-current assets.
    pub total_non_current_assets: Decimal,
    /// All assets.
    pub total_assets: Decimal,
    /// Current liabilities.
    pub total_current_liabilities: Decimal,
    /// Non-current liabilities.
    pub total_non_current_liabilities: Decimal,
    /// All liabilities.
    pub total_liabilities: Decimal,
    /// Equity.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub total_liabilities_and_equity: Decimal,
}

impl BalanceSheetSummary {
    /// Whether assets equal liabilities plus equity. Reported, not enforced.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_assets == self.total_liabilities_and_equity
    }
}

/// Balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Statement title.
    pub title: String,
    /// Sections in statement order.
    pub sections: Vec<Section>,
    /// Headline figures.
    pub summary: BalanceSheetSummary,
}

impl Statement for BalanceSheet {
    fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Headline figures of the cash flow statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Net profit plus depreciation and amortization.
    pub cash_from_operations: Decimal,
    /// Estimated capital expenditure.
    pub cash_from_investing: Decimal,
    /// Estimated net borrowings.
    pub cash_from_financing: Decimal,
    /// Sum of all activities.
    pub net_change: Decimal,
}

/// Cash flow statement (simplified indirect method).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Statement title.
    pub title: String,
    /// Sections in statement order.
    pub sections: Vec<Section>,
    /// Headline figures.
    pub summary: CashFlowSummary,
}

impl Statement for CashFlow {
    fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// The three statements of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Profit & Loss.
    pub profit_and_loss: ProfitAndLoss,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Cash flow.
    pub cash_flow: CashFlow,
}
