//! Financial ratio engine.
//!
//! Ratios are derived from the statements of [`crate::reports`] and graded
//! against fixed benchmark ranges.

pub mod benchmark;
pub mod engine;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use benchmark::Benchmark;
pub use engine::{INTEREST_COVERAGE_CAP, RatioEngine, SupportingFigures, safe_div, safe_pct};
pub use service::RatioService;
pub use types::{Ratio, RatioCategory, RatioGroup, RatioReport, RatioStatus, RatioUnit};
