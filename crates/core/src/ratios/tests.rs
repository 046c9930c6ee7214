//! Tests for the ratio engine.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::benchmark::Benchmark;
use super::engine::{INTEREST_COVERAGE_CAP, RatioEngine, safe_div, safe_pct};
use super::types::{RatioCategory, RatioReport, RatioStatus};
use crate::labels::KeywordLabelClassifier;
use crate::reports::{FinancialStatements, LineBalance, StatementBuilder};
use crate::taxonomy::{Category, NormalBalance, sub_category};

fn line(label: &str, code: &str, category: Category, sub: &str, amount: Decimal) -> LineBalance {
    let (normal_balance, debit, credit) = match category {
        Category::Asset | Category::Expense => (NormalBalance::Debit, amount, Decimal::ZERO),
        Category::Liability | Category::Equity | Category::Revenue => {
            (NormalBalance::Credit, Decimal::ZERO, amount)
        }
    };
    LineBalance {
        label: label.to_string(),
        first_code: code.to_string(),
        category,
        sub_category: sub.to_string(),
        normal_balance,
        debit,
        credit,
        balance: debit - credit,
    }
}

fn statements(balances: &[LineBalance]) -> FinancialStatements {
    StatementBuilder::new(&KeywordLabelClassifier).build(balances)
}

fn ratios(balances: &[LineBalance]) -> RatioReport {
    let statements = statements(balances);
    RatioEngine::new(&KeywordLabelClassifier)
        .compute(&statements.profit_and_loss, &statements.balance_sheet)
}

fn company() -> Vec<LineBalance> {
    vec![
        line("Cash and Cash Equivalents", "1010", Category::Asset, sub_category::CURRENT_ASSET, dec!(350000)),
        line("Trade Receivables", "1110", Category::Asset, sub_category::CURRENT_ASSET, dec!(60000)),
        line("Inventories", "1200", Category::Asset, sub_category::CURRENT_ASSET, dec!(50000)),
        line("Property, Plant and Equipment", "2000", Category::Asset, sub_category::NON_CURRENT_ASSET, dec!(200000)),
        line("Trade Payables", "3010", Category::Liability, sub_category::CURRENT_LIABILITY, dec!(100000)),
        line("Borrowings", "4000", Category::Liability, sub_category::NON_CURRENT_LIABILITY, dec!(150000)),
        line("Share Capital", "5000", Category::Equity, sub_category::EQUITY, dec!(410000)),
        line("Revenue", "6010", Category::Revenue, sub_category::OPERATING_REVENUE, dec!(500000)),
        line("Cost of Sales", "7000", Category::Expense, sub_category::COST_OF_SALES, dec!(200000)),
        line("Staff Costs", "8110", Category::Expense, sub_category::OPERATING_EXPENSE, dec!(80000)),
        line("Depreciation and Amortization", "8200", Category::Expense, sub_category::OPERATING_EXPENSE, dec!(20000)),
        line("Finance Costs", "9010", Category::Expense, sub_category::FINANCE_COST, dec!(15000)),
        line("Income Tax", "9100", Category::Expense, sub_category::TAX, dec!(19000)),
    ]
}

#[test]
fn test_empty_ledger_ratios() {
    let report = ratios(&[]);

    assert_eq!(report.ratios().count(), 14);
    for ratio in report.ratios() {
        if ratio.name == "Interest Coverage" {
            assert_eq!(ratio.value, INTEREST_COVERAGE_CAP);
            assert_eq!(ratio.status, RatioStatus::Good);
        } else {
            assert_eq!(ratio.value, Decimal::ZERO, "{}", ratio.name);
        }
    }
}

#[test]
fn test_gross_margin_scenario() {
    let balances = vec![
        line("Cash and Cash Equivalents", "1010", Category::Asset, sub_category::CURRENT_ASSET, dec!(300000)),
        line("Revenue", "6010", Category::Revenue, sub_category::OPERATING_REVENUE, dec!(500000)),
        line("Cost of Sales", "7000", Category::Expense, sub_category::COST_OF_SALES, dec!(200000)),
    ];

    let statements = statements(&balances);
    assert_eq!(statements.profit_and_loss.summary.revenue, dec!(500000));
    assert_eq!(statements.profit_and_loss.summary.cogs, dec!(200000));
    assert_eq!(statements.profit_and_loss.summary.gross_profit, dec!(300000));

    let report = ratios(&balances);
    let gross_margin = report.get("Gross Margin").unwrap();
    assert_eq!(gross_margin.value, dec!(60));
    assert_eq!(gross_margin.status, RatioStatus::Good);
    assert_eq!(serde_json::to_value(gross_margin.unit).unwrap(), "%");
}

#[rstest]
#[case("Current Ratio", dec!(4.6), RatioStatus::Good)]
#[case("Quick Ratio", dec!(4.1), RatioStatus::Good)]
#[case("Cash Ratio", dec!(3.5), RatioStatus::Good)]
#[case("EBITDA Margin", dec!(44), RatioStatus::Good)]
#[case("Net Margin", dec!(33.2), RatioStatus::Good)]
#[case("Return on Equity (ROE)", dec!(40.49), RatioStatus::Good)]
#[case("Return on Assets (ROA)", dec!(25.15), RatioStatus::Good)]
#[case("Days Sales Outstanding (DSO)", dec!(43.8), RatioStatus::Good)]
#[case("Days Payable Outstanding (DPO)", dec!(182.5), RatioStatus::Good)]
#[case("Inventory Days", dec!(91.25), RatioStatus::Warning)]
#[case("Cash Conversion Cycle", dec!(-47.45), RatioStatus::Good)]
#[case("Debt to Equity", dec!(0.61), RatioStatus::Good)]
#[case("Interest Coverage", dec!(14.67), RatioStatus::Good)]
fn test_company_ratios(#[case] name: &str, #[case] value: Decimal, #[case] status: RatioStatus) {
    let report = ratios(&company());
    let ratio = report.get(name).unwrap();

    assert_eq!(ratio.value, value);
    assert_eq!(ratio.status, status);
}

#[test]
fn test_groups_and_titles() {
    let report = ratios(&company());

    let liquidity = report.group(RatioCategory::Liquidity).unwrap();
    assert_eq!(liquidity.title, "Liquidity Ratios");
    assert_eq!(liquidity.ratios.len(), 3);
    assert_eq!(report.group(RatioCategory::Profitability).unwrap().ratios.len(), 5);
    assert_eq!(report.group(RatioCategory::WorkingCapital).unwrap().ratios.len(), 4);
    assert_eq!(report.group(RatioCategory::Leverage).unwrap().ratios.len(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["working_capital"]["title"], "Working Capital Ratios");
    assert_eq!(json["leverage"]["ratios"][1]["status"], "good");
}

#[test]
fn test_interest_sniffed_across_all_pnl_sections() {
    let mut balances = company();
    balances.retain(|l| l.label != "Finance Costs");
    balances.push(line("Finance Income", "6510", Category::Revenue, sub_category::OTHER_INCOME, dec!(5000)));

    let statements = statements(&balances);
    assert_eq!(statements.profit_and_loss.summary.ebitda, dec!(220000));

    let report = ratios(&balances);
    assert_eq!(report.get("Interest Coverage").unwrap().value, dec!(44));
}

#[test]
fn test_huge_working_capital_balances_do_not_overflow() {
    let mut balances = company();
    balances.retain(|l| l.label != "Trade Receivables");
    let huge = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
    balances.push(line("Trade Receivables", "1110", Category::Asset, sub_category::CURRENT_ASSET, huge));

    let report = ratios(&balances);
    assert_eq!(report.get("Days Sales Outstanding (DSO)").unwrap().value, Decimal::ZERO);
    assert_eq!(report.get("Days Payable Outstanding (DPO)").unwrap().value, dec!(182.5));
    assert_eq!(report.get("Cash Conversion Cycle").unwrap().value, dec!(-91.25));
}

#[rstest]
#[case(dec!(1.5), RatioStatus::Good)]
#[case(dec!(1.49), RatioStatus::Warning)]
#[case(dec!(1.0), RatioStatus::Warning)]
#[case(dec!(0.99), RatioStatus::Danger)]
fn test_higher_is_better(#[case] value: Decimal, #[case] expected: RatioStatus) {
    assert_eq!(Benchmark::at_least(dec!(1.5), dec!(1.0)).status(value), expected);
}

#[rstest]
#[case(dec!(45), RatioStatus::Good)]
#[case(dec!(45.01), RatioStatus::Warning)]
#[case(dec!(90), RatioStatus::Warning)]
#[case(dec!(90.01), RatioStatus::Danger)]
fn test_lower_is_better(#[case] value: Decimal, #[case] expected: RatioStatus) {
    assert_eq!(Benchmark::at_most(dec!(45), dec!(90)).status(value), expected);
}

#[test]
fn test_two_band_benchmarks_never_danger() {
    let dpo = Benchmark::HigherIsBetter { good: dec!(30), warning: None };
    assert_eq!(dpo.status(dec!(-1000)), RatioStatus::Warning);

    let ccc = Benchmark::LowerIsBetter { good: dec!(60), warning: None };
    assert_eq!(ccc.status(dec!(1000)), RatioStatus::Warning);
}

#[test]
fn test_safe_division() {
    assert_eq!(safe_div(dec!(10), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(safe_div(dec!(10), dec!(3)), dec!(3.33));
    assert_eq!(safe_pct(dec!(1), dec!(3)), dec!(33.33));
    assert_eq!(safe_pct(dec!(1), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(safe_div(Decimal::MAX, dec!(0.0001)), Decimal::ZERO);
}

proptest! {
    /// More revenue at fixed cost of sales strictly increases gross margin.
    #[test]
    fn prop_gross_margin_monotonic(
        revenue in 1_000i64..1_000_000,
        cost_share in 10i64..100,
        extra in 0i64..1_000_000,
    ) {
        let revenue = Decimal::from(revenue);
        let cogs = (revenue * Decimal::new(cost_share, 2)).round_dp(2);
        let more_revenue = revenue + revenue + Decimal::from(extra);

        let margin = |revenue: Decimal| {
            ratios(&[
                line("Revenue", "6010", Category::Revenue, sub_category::OPERATING_REVENUE, revenue),
                line("Cost of Sales", "7000", Category::Expense, sub_category::COST_OF_SALES, cogs),
            ])
            .get("Gross Margin")
            .map(|r| r.value)
            .unwrap_or_default()
        };

        prop_assert!(margin(more_revenue) > margin(revenue));
    }
}
