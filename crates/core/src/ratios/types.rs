//! Ratio data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Benchmark grade of a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioStatus {
    /// Within the healthy range.
    Good,
    /// Needs attention.
    Warning,
    /// Outside the acceptable range.
    Danger,
}

/// Unit a ratio is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioUnit {
    /// Percentage.
    #[serde(rename = "%")]
    Percent,
    /// Days.
    #[serde(rename = "days")]
    Days,
    /// Multiple.
    #[serde(rename = "x")]
    Times,
}

/// A computed ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Display name.
    pub name: String,
    /// Value rounded to 2 places.
    pub value: Decimal,
    /// Unit of the value.
    pub unit: RatioUnit,
    /// Human readable formula.
    pub formula: String,
    /// Human readable benchmark range.
    pub benchmark: String,
    /// Grade against the benchmark.
    pub status: RatioStatus,
}

/// Ratio family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Short-term solvency.
    Liquidity,
    /// Margins and returns.
    Profitability,
    /// Operating cycle.
    WorkingCapital,
    /// Gearing and coverage.
    Leverage,
}

impl RatioCategory {
    /// Group title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Liquidity => "Liquidity Ratios",
            Self::Profitability => "Profitability Ratios",
            Self::WorkingCapital => "Working Capital Ratios",
            Self::Leverage => "Leverage Ratios",
        }
    }
}

/// Ratios of one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioGroup {
    /// Group title.
    pub title: String,
    /// Ratios in display order.
    pub ratios: Vec<Ratio>,
}

/// All ratio groups keyed by family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioReport(pub BTreeMap<RatioCategory, RatioGroup>);

impl RatioReport {
    /// Group of a family.
    #[must_use]
    pub fn group(&self, category: RatioCategory) -> Option<&RatioGroup> {
        self.0.get(&category)
    }

    /// Finds a ratio by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Ratio> {
        self.ratios().find(|ratio| ratio.name == name)
    }

    /// All ratios, family by family.
    pub fn ratios(&self) -> impl Iterator<Item = &Ratio> {
        self.0.values().flat_map(|group| group.ratios.iter())
    }
}
