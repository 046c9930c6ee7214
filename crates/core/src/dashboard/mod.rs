//! Dashboard headline figures.
//!
//! This module derives the KPI tiles of the company overview from the
//! statements and ratios.

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{DashboardKpis, DashboardSummary};
