//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::labels::{BalanceLineKind, LineLabelClassifier};
use crate::ratios::RatioReport;
use crate::reports::{FinancialStatements, Statement};

/// Name of the ratio surfaced as the cash conversion tile.
const CASH_CONVERSION_CYCLE: &str = "Cash Conversion Cycle";

/// Dashboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Whether the company has any ledger entries.
    pub has_data: bool,
    /// Headline figures, absent without data.
    pub kpis: Option<DashboardKpis>,
}

impl DashboardSummary {
    /// Summary of a company without ledger entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_data: false,
            kpis: None,
        }
    }
}

/// Headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardKpis {
    /// Operating revenue.
    pub revenue: Decimal,
    /// EBITDA.
    pub ebitda: Decimal,
    /// Net profit.
    pub net_profit: Decimal,
    /// Sum of balance-sheet cash lines.
    pub cash_position: Decimal,
    /// Total liabilities minus cash.
    pub net_debt: Decimal,
    /// Current assets minus current liabilities.
    pub working_capital: Decimal,
    /// Cash conversion cycle in days.
    pub cash_conversion_cycle: Decimal,
    /// Gross margin, 1 decimal.
    pub gross_margin: Decimal,
    /// Net margin, 1 decimal.
    pub net_margin: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
}

impl DashboardKpis {
    /// Derives the figures from statements and ratios.
    #[must_use]
    pub fn from_reports(
        statements: &FinancialStatements,
        ratios: &RatioReport,
        labels: &dyn LineLabelClassifier,
    ) -> Self {
        let pnl = &statements.profit_and_loss.summary;
        let bs = &statements.balance_sheet.summary;

        let cash_position: Decimal = statements
            .balance_sheet
            .lines()
            .filter(|line| labels.balance_line_kind(&line.label) == Some(BalanceLineKind::Cash))
            .map(|line| line.amount)
            .sum();

        Self {
            revenue: pnl.revenue,
            ebitda: pnl.ebitda,
            net_profit: pnl.net_profit,
            cash_position,
            net_debt: bs.total_liabilities - cash_position,
            working_capital: bs.total_current_assets - bs.total_current_liabilities,
            cash_conversion_cycle: ratios
                .get(CASH_CONVERSION_CYCLE)
                .map_or(Decimal::ZERO, |ratio| ratio.value),
            gross_margin: margin(pnl.gross_profit, pnl.revenue),
            net_margin: margin(pnl.net_profit, pnl.revenue),
            total_assets: bs.total_assets,
            total_equity: bs.total_equity,
        }
    }
}

fn margin(amount: Decimal, revenue: Decimal) -> Decimal {
    if revenue.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .checked_div(revenue)
        .map_or(Decimal::ZERO, |share| (share * Decimal::ONE_HUNDRED).round_dp(1))
}
