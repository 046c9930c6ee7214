//! Statement construction from grouped line balances.

use rust_decimal::Decimal;

use super::types::{
    BalanceSheet, BalanceSheetSummary, CashFlow, CashFlowSummary, FinancialStatements, LineBalance,
    ProfitAndLoss, ProfitAndLossSummary, Section, StatementLine, section,
};
use crate::labels::LineLabelClassifier;
use crate::taxonomy::{Category, sub_category};

/// Share of non-current assets reported as capital expenditure.
const CAPEX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Share of non-current liabilities reported as net borrowings.
const BORROWINGS_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Builds the three statements with their sign conventions and subtotals.
pub struct StatementBuilder<'a> {
    labels: &'a dyn LineLabelClassifier,
}

impl<'a> StatementBuilder<'a> {
    /// Creates a builder using the given label rules.
    #[must_use]
    pub fn new(labels: &'a dyn LineLabelClassifier) -> Self {
        Self { labels }
    }

    /// Builds all statements from grouped balances.
    #[must_use]
    pub fn build(&self, balances: &[LineBalance]) -> FinancialStatements {
        let profit_and_loss = self.profit_and_loss(balances);
        let balance_sheet = self.balance_sheet(balances);
        let cash_flow = self.cash_flow(&profit_and_loss, &balance_sheet);

        FinancialStatements {
            profit_and_loss,
            balance_sheet,
            cash_flow,
        }
    }

    /// Builds the Profit & Loss statement.
    ///
    /// Revenue lines split into operating revenue and other income; expense
    /// lines into cost of sales, finance costs, tax and operating expenses.
    #[must_use]
    pub fn profit_and_loss(&self, balances: &[LineBalance]) -> ProfitAndLoss {
        let mut revenue = Vec::new();
        let mut other_income = Vec::new();
        let mut cogs = Vec::new();
        let mut opex = Vec::new();
        let mut finance = Vec::new();
        let mut tax = Vec::new();

        for line in balances {
            let item = StatementLine::new(&line.label, line.amount());
            match line.category {
                Category::Revenue if sub_category::is(&line.sub_category, sub_category::OTHER_INCOME) => {
                    other_income.push(item);
                }
                Category::Revenue => revenue.push(item),
                Category::Expense if sub_category::is(&line.sub_category, sub_category::COST_OF_SALES) => {
                    cogs.push(item);
                }
                Category::Expense if sub_category::is(&line.sub_category, sub_category::FINANCE_COST) => {
                    finance.push(item);
                }
                Category::Expense if sub_category::is(&line.sub_category, sub_category::TAX) => {
                    tax.push(item);
                }
                Category::Expense => opex.push(item),
                Category::Asset | Category::Liability | Category::Equity => {}
            }
        }

        let depreciation_and_amortization: Decimal = opex
            .iter()
            .filter(|item| self.labels.is_depreciation_line(&item.label))
            .map(|item| item.amount)
            .sum();

        let revenue = Section::detail(section::REVENUE, revenue);
        let cogs = Section::detail(section::COST_OF_REVENUE, cogs);
        let opex = Section::detail(section::OPERATING_EXPENSES, opex);
        let other_income = Section::detail(section::OTHER_INCOME, other_income);
        let finance = Section::detail(section::FINANCE_COSTS, finance);
        let tax = Section::detail(section::TAX_EXPENSE, tax);

        let gross_profit = revenue.total - cogs.total;
        let operating_profit = gross_profit - opex.total;
        let profit_before_tax = operating_profit + other_income.total - finance.total;
        let net_profit = profit_before_tax - tax.total;

        let summary = ProfitAndLossSummary {
            revenue: revenue.total,
            cogs: cogs.total,
            gross_profit,
            operating_expenses: opex.total,
            operating_profit,
            other_income: other_income.total,
            finance_costs: finance.total,
            profit_before_tax,
            tax: tax.total,
            net_profit,
            depreciation_and_amortization,
            ebitda: operating_profit + depreciation_and_amortization,
        };

        ProfitAndLoss {
            title: "Profit & Loss Statement".to_string(),
            sections: vec![
                revenue,
                cogs,
                Section::subtotal(section::GROSS_PROFIT, gross_profit),
                opex,
                Section::subtotal(section::OPERATING_PROFIT, operating_profit),
                other_income,
                finance,
                Section::subtotal(section::PROFIT_BEFORE_TAX, profit_before_tax),
                tax,
                Section::subtotal(section::NET_PROFIT, net_profit),
            ],
            summary,
        }
    }

    /// Builds the balance sheet. Revenue and expense lines are ignored.
    #[must_use]
    pub fn balance_sheet(&self, balances: &[LineBalance]) -> BalanceSheet {
        let mut current_assets = Vec::new();
        let mut non_current_assets = Vec::new();
        let mut current_liabilities = Vec::new();
        let mut non_current_liabilities = Vec::new();
        let mut equity = Vec::new();

        for line in balances {
            let item = StatementLine::new(&line.label, line.amount());
            match line.category {
                Category::Asset if sub_category::is(&line.sub_category, sub_category::CURRENT_ASSET) => {
                    current_assets.push(item);
                }
                Category::Asset => non_current_assets.push(item),
                Category::Liability
                    if sub_category::is(&line.sub_category, sub_category::CURRENT_LIABILITY) =>
                {
                    current_liabilities.push(item);
                }
                Category::Liability => non_current_liabilities.push(item),
                Category::Equity => equity.push(item),
                Category::Revenue | Category::Expense => {}
            }
        }

        let current_assets = Section::detail(section::CURRENT_ASSETS, current_assets);
        let non_current_assets = Section::detail(section::NON_CURRENT_ASSETS, non_current_assets);
        let current_liabilities = Section::detail(section::CURRENT_LIABILITIES, current_liabilities);
        let non_current_liabilities =
            Section::detail(section::NON_CURRENT_LIABILITIES, non_current_liabilities);
        let equity = Section::detail(section::EQUITY, equity);

        let total_assets = current_assets.total + non_current_assets.total;
        let total_liabilities = current_liabilities.total + non_current_liabilities.total;
        let total_liabilities_and_equity = total_liabilities + equity.total;

        let summary = BalanceSheetSummary {
            total_current_assets: current_assets.total,
            total_non_current_assets: non_current_assets.total,
            total_assets,
            total_current_liabilities: current_liabilities.total,
            total_non_current_liabilities: non_current_liabilities.total,
            total_liabilities,
            total_equity: equity.total,
            total_liabilities_and_equity,
        };

        BalanceSheet {
            title: "Balance Sheet".to_string(),
            sections: vec![
                current_assets,
                non_current_assets,
                Section::subtotal(section::TOTAL_ASSETS, total_assets),
                current_liabilities,
                non_current_liabilities,
                Section::subtotal(section::TOTAL_LIABILITIES, total_liabilities),
                equity,
                Section::subtotal(section::TOTAL_LIABILITIES_AND_EQUITY, total_liabilities_and_equity),
            ],
            summary,
        }
    }

    /// Builds the simplified indirect cash flow statement.
    ///
    /// Investing activity is estimated as 10% of positive non-current assets
    /// spent, financing as 5% of positive non-current liabilities raised.
    #[must_use]
    pub fn cash_flow(&self, pnl: &ProfitAndLoss, bs: &BalanceSheet) -> CashFlow {
        let net_profit = pnl.summary.net_profit;
        let depreciation = pnl.summary.depreciation_and_amortization;

        let operating = Section::detail(
            section::OPERATING_ACTIVITIES,
            vec![
                StatementLine::new("Net Profit", net_profit),
                StatementLine::new("Depreciation & Amortization", depreciation),
            ],
        );

        let mut investing = Vec::new();
        let non_current_assets = bs.summary.total_non_current_assets;
        if non_current_assets > Decimal::ZERO {
            investing.push(StatementLine::new(
                "Capital Expenditure",
                -(non_current_assets * CAPEX_RATE),
            ));
        }
        let investing = Section::detail(section::INVESTING_ACTIVITIES, investing);

        let mut financing = Vec::new();
        let non_current_liabilities = bs.summary.total_non_current_liabilities;
        if non_current_liabilities > Decimal::ZERO {
            financing.push(StatementLine::new(
                "Net Borrowings",
                non_current_liabilities * BORROWINGS_RATE,
            ));
        }
        let financing = Section::detail(section::FINANCING_ACTIVITIES, financing);

        let net_change = operating.total + investing.total + financing.total;

        let summary = CashFlowSummary {
            cash_from_operations: operating.total,
            cash_from_investing: investing.total,
            cash_from_financing: financing.total,
            net_change,
        };

        CashFlow {
            title: "Cash Flow Statement (Indirect Method)".to_string(),
            sections: vec![
                operating,
                investing,
                financing,
                Section::subtotal(section::NET_CHANGE_IN_CASH, net_change),
            ],
            summary,
        }
    }
}
