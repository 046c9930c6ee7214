//! Benchmark ranges and grading.

use rust_decimal::Decimal;

use super::types::RatioStatus;

/// Grading rule for a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    /// `value >= good` is good, `value >= warning` is a warning, anything
    /// lower is danger. Without a warning bound every non-good value is a
    /// warning.
    HigherIsBetter {
        /// Lowest good value.
        good: Decimal,
        /// Lowest warning value.
        warning: Option<Decimal>,
    },
    /// `value <= good` is good, `value <= warning` is a warning, anything
    /// higher is danger. Without a warning bound every non-good value is a
    /// warning.
    LowerIsBetter {
        /// Highest good value.
        good: Decimal,
        /// Highest warning value.
        warning: Option<Decimal>,
    },
}

impl Benchmark {
    /// Higher-is-better rule with a danger band.
    #[must_use]
    pub const fn at_least(good: Decimal, warning: Decimal) -> Self {
        Self::HigherIsBetter {
            good,
            warning: Some(warning),
        }
    }

    /// Lower-is-better rule with a danger band.
    #[must_use]
    pub const fn at_most(good: Decimal, warning: Decimal) -> Self {
        Self::LowerIsBetter {
            good,
            warning: Some(warning),
        }
    }

    /// Grades a value.
    #[must_use]
    pub fn status(&self, value: Decimal) -> RatioStatus {
        match *self {
            Self::HigherIsBetter { good, warning } => {
                if value >= good {
                    RatioStatus::Good
                } else if warning.is_none_or(|bound| value >= bound) {
                    RatioStatus::Warning
                } else {
                    RatioStatus::Danger
                }
            }
            Self::LowerIsBetter { good, warning } => {
                if value <= good {
                    RatioStatus::Good
                } else if warning.is_none_or(|bound| value <= bound) {
                    RatioStatus::Warning
                } else {
                    RatioStatus::Danger
                }
            }
        }
    }
}
