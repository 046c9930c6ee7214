//! Financial statement aggregation.
//!
//! This module turns classified ledger balances into statements:
//! - Profit & Loss with gross, operating, pre-tax and net subtotals
//! - Balance Sheet with asset, liability and equity subtotals
//! - Simplified indirect Cash Flow

pub mod builder;
pub mod error;
pub mod grouping;
pub mod service;
pub mod types;


pub use builder::StatementBuilder;
pub use error::ReportError;
pub use grouping::group_balances;
pub use service::StatementService;
pub use types::{
    BalanceSheet, BalanceSheetSummary, CashFlow, CashFlowSummary, FinancialStatements, LineBalance,
    ProfitAndLoss, ProfitAndLossSummary, Section, Statement, StatementLine, section,
};
