//! Core business logic for Finstat.
//!
//! This crate contains the classification and reporting engine with ZERO
//! storage or web dependencies. Persistence is reached through the
//! repository traits each module defines.
//!
//! # Modules
//!
//! - `taxonomy` - Master chart of canonical accounts
//! - `ledger` - Trial balance intake and validation
//! - `classifier` - Keyword and fuzzy matching of source accounts
//! - `mapping` - Classification store contract and manual overrides
//! - `labels` - Statement line label recognition
//! - `reports` - Profit & Loss, Balance Sheet and Cash Flow
//! - `ratios` - Financial ratio battery with benchmarks
//! - `dashboard` - Headline KPIs

pub mod classifier;
pub mod dashboard;
pub mod labels;
pub mod ledger;
pub mod mapping;
pub mod ratios;
pub mod reports;
pub mod taxonomy;
