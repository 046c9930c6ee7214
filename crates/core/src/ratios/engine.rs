//! Ratio computation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::benchmark::Benchmark;
use super::types::{Ratio, RatioCategory, RatioGroup, RatioReport, RatioUnit};
use crate::labels::{BalanceLineKind, LineLabelClassifier};
use crate::reports::{BalanceSheet, ProfitAndLoss, Statement};

/// Interest coverage reported when there is no interest expense.
pub const INTEREST_COVERAGE_CAP: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

const DAYS_IN_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// `numerator / denominator` rounded to 2 places; zero when the denominator
/// is zero or the quotient overflows.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .map_or(Decimal::ZERO, |q| q.round_dp(2))
}

/// `numerator / denominator * 100` rounded to 2 places; zero when the
/// denominator is zero.
#[must_use]
pub fn safe_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Decimal::ZERO, |q| q.round_dp(2))
}

/// `amount × 365 / base` rounded to 2 places; zero when either step
/// overflows or the base is zero.
fn days(amount: Decimal, base: Decimal) -> Decimal {
    amount
        .checked_mul(DAYS_IN_YEAR)
        .map_or(Decimal::ZERO, |scaled| safe_div(scaled, base))
}

/// Quantities recognized from statement line labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupportingFigures {
    /// Inventory lines.
    pub inventory: Decimal,
    /// Receivable lines.
    pub receivables: Decimal,
    /// Payable lines.
    pub payables: Decimal,
    /// Cash lines.
    pub cash: Decimal,
    /// Interest and finance expense lines.
    pub interest_expense: Decimal,
}

impl SupportingFigures {
    /// Sniffs balance-sheet lines and every P&L detail line.
    #[must_use]
    pub fn from_statements(
        pnl: &ProfitAndLoss,
        bs: &BalanceSheet,
        labels: &dyn LineLabelClassifier,
    ) -> Self {
        let mut figures = Self::default();

        for line in bs.lines() {
            match labels.balance_line_kind(&line.label) {
                Some(BalanceLineKind::Inventory) => figures.inventory += line.amount,
                Some(BalanceLineKind::Receivable) => figures.receivables += line.amount,
                Some(BalanceLineKind::Payable) => figures.payables += line.amount,
                Some(BalanceLineKind::Cash) => figures.cash += line.amount,
                None => {}
            }
        }

        figures.interest_expense = pnl
            .lines()
            .filter(|line| labels.is_interest_line(&line.label))
            .map(|line| line.amount)
            .sum();

        figures
    }
}

/// Derives the ratio battery from a P&L and a balance sheet.
pub struct RatioEngine<'a> {
    labels: &'a dyn LineLabelClassifier,
}

impl<'a> RatioEngine<'a> {
    /// Creates an engine using the given label rules.
    #[must_use]
    pub fn new(labels: &'a dyn LineLabelClassifier) -> Self {
        Self { labels }
    }

    /// Computes all ratios.
    #[must_use]
    pub fn compute(&self, pnl: &ProfitAndLoss, bs: &BalanceSheet) -> RatioReport {
        let figures = SupportingFigures::from_statements(pnl, bs, self.labels);
        let mut groups = BTreeMap::new();

        groups.insert(RatioCategory::Liquidity, liquidity(bs, &figures));
        groups.insert(RatioCategory::Profitability, profitability(pnl, bs));
        groups.insert(RatioCategory::WorkingCapital, working_capital(pnl, &figures));
        groups.insert(RatioCategory::Leverage, leverage(pnl, bs, &figures));

        RatioReport(groups)
    }
}

fn ratio(
    name: &str,
    value: Decimal,
    unit: RatioUnit,
    formula: &str,
    benchmark_label: &str,
    benchmark: Benchmark,
) -> Ratio {
    Ratio {
        name: name.to_string(),
        value,
        unit,
        formula: formula.to_string(),
        benchmark: benchmark_label.to_string(),
        status: benchmark.status(value),
    }
}

fn group(category: RatioCategory, ratios: Vec<Ratio>) -> RatioGroup {
    RatioGroup {
        title: category.title().to_string(),
        ratios,
    }
}

fn liquidity(bs: &BalanceSheet, figures: &SupportingFigures) -> RatioGroup {
    let s = &bs.summary;
    let quick_assets = s.total_current_assets - figures.inventory;

    group(
        RatioCategory::Liquidity,
        vec![
            ratio(
                "Current Ratio",
                safe_div(s.total_current_assets, s.total_current_liabilities),
                RatioUnit::Times,
                "Current Assets / Current Liabilities",
                "1.5 - 2.0",
                Benchmark::at_least(Decimal::new(15, 1), Decimal::ONE),
            ),
            ratio(
                "Quick Ratio",
                safe_div(quick_assets, s.total_current_liabilities),
                RatioUnit::Times,
                "(Current Assets - Inventory) / Current Liabilities",
                "1.0 - 1.5",
                Benchmark::at_least(Decimal::ONE, Decimal::new(5, 1)),
            ),
            ratio(
                "Cash Ratio",
                safe_div(figures.cash, s.total_current_liabilities),
                RatioUnit::Times,
                "Cash / Current Liabilities",
                "0.5 - 1.0",
                Benchmark::at_least(Decimal::new(5, 1), Decimal::new(2, 1)),
            ),
        ],
    )
}

fn profitability(pnl: &ProfitAndLoss, bs: &BalanceSheet) -> RatioGroup {
    let p = &pnl.summary;
    let b = &bs.summary;

    group(
        RatioCategory::Profitability,
        vec![
            ratio(
                "Gross Margin",
                safe_pct(p.gross_profit, p.revenue),
                RatioUnit::Percent,
                "Gross Profit / Revenue × 100",
                "30% - 50%",
                Benchmark::at_least(Decimal::from(30), Decimal::from(15)),
            ),
            ratio(
                "EBITDA Margin",
                safe_pct(p.ebitda, p.revenue),
                RatioUnit::Percent,
                "EBITDA / Revenue × 100",
                "15% - 25%",
                Benchmark::at_least(Decimal::from(15), Decimal::from(8)),
            ),
            ratio(
                "Net Margin",
                safe_pct(p.net_profit, p.revenue),
                RatioUnit::Percent,
                "Net Profit / Revenue × 100",
                "10% - 20%",
                Benchmark::at_least(Decimal::from(10), Decimal::from(3)),
            ),
            ratio(
                "Return on Equity (ROE)",
                safe_pct(p.net_profit, b.total_equity),
                RatioUnit::Percent,
                "Net Profit / Total Equity × 100",
                "15% - 25%",
                Benchmark::at_least(Decimal::from(15), Decimal::from(8)),
            ),
            ratio(
                "Return on Assets (ROA)",
                safe_pct(p.net_profit, b.total_assets),
                RatioUnit::Percent,
                "Net Profit / Total Assets × 100",
                "5% - 15%",
                Benchmark::at_least(Decimal::from(5), Decimal::from(2)),
            ),
        ],
    )
}

fn working_capital(pnl: &ProfitAndLoss, figures: &SupportingFigures) -> RatioGroup {
    let p = &pnl.summary;
    let dso = days(figures.receivables, p.revenue);
    let dpo = days(figures.payables, p.cogs);
    let inventory_days = days(figures.inventory, p.cogs);
    let cash_conversion_cycle = dso
        .checked_add(inventory_days)
        .and_then(|sum| sum.checked_sub(dpo))
        .map_or(Decimal::ZERO, |ccc| ccc.round_dp(2));

    group(
        RatioCategory::WorkingCapital,
        vec![
            ratio(
                "Days Sales Outstanding (DSO)",
                dso,
                RatioUnit::Days,
                "Receivables / Revenue × 365",
                "30 - 60 days",
                Benchmark::at_most(Decimal::from(45), Decimal::from(90)),
            ),
            ratio(
                "Days Payable Outstanding (DPO)",
                dpo,
                RatioUnit::Days,
                "Payables / COGS × 365",
                "30 - 60 days",
                Benchmark::HigherIsBetter {
                    good: Decimal::from(30),
                    warning: None,
                },
            ),
            ratio(
                "Inventory Days",
                inventory_days,
                RatioUnit::Days,
                "Inventory / COGS × 365",
                "30 - 90 days",
                Benchmark::at_most(Decimal::from(60), Decimal::from(120)),
            ),
            ratio(
                "Cash Conversion Cycle",
                cash_conversion_cycle,
                RatioUnit::Days,
                "DSO + Inventory Days - DPO",
                "< 60 days",
                Benchmark::LowerIsBetter {
                    good: Decimal::from(60),
                    warning: None,
                },
            ),
        ],
    )
}

fn leverage(pnl: &ProfitAndLoss, bs: &BalanceSheet, figures: &SupportingFigures) -> RatioGroup {
    let interest_coverage = if figures.interest_expense.is_zero() {
        INTEREST_COVERAGE_CAP
    } else {
        safe_div(pnl.summary.ebitda, figures.interest_expense)
    };

    group(
        RatioCategory::Leverage,
        vec![
            ratio(
                "Debt to Equity",
                safe_div(bs.summary.total_liabilities, bs.summary.total_equity),
                RatioUnit::Times,
                "Total Liabilities / Total Equity",
                "0.5 - 1.5",
                Benchmark::at_most(Decimal::new(15, 1), Decimal::from(3)),
            ),
            ratio(
                "Interest Coverage",
                interest_coverage,
                RatioUnit::Times,
                "EBITDA / Interest Expense",
                "> 3.0x",
                Benchmark::at_least(Decimal::from(3), Decimal::new(15, 1)),
            ),
        ],
    )
}
