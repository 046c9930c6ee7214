//! Statement line label sniffing.
//!
//! Ratios and cash flow need a few quantities the taxonomy does not tag
//! explicitly (inventory, receivables, interest, depreciation). They are
//! recognized from statement line labels behind [`LineLabelClassifier`] so a
//! taxonomy-driven implementation can replace the substring rules.

/// Balance-sheet quantity a line contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceLineKind {
    /// Inventories.
    Inventory,
    /// Trade and other receivables.
    Receivable,
    /// Trade and other payables.
    Payable,
    /// Cash and cash equivalents.
    Cash,
}

/// Recognizes special statement lines by label.
pub trait LineLabelClassifier: Send + Sync {
    /// Kind of a balance-sheet line, if any. A line has at most one kind.
    fn balance_line_kind(&self, label: &str) -> Option<BalanceLineKind>;

    /// Returns true if a P&L expense line carries interest or finance costs.
    fn is_interest_line(&self, label: &str) -> bool;

    /// Returns true if an operating expense line is depreciation or amortization.
    fn is_depreciation_line(&self, label: &str) -> bool;
}

/// Substring rules on lower-cased labels.
///
/// Balance-sheet kinds are checked in the order inventory, receivable,
/// payable, cash; the first hit wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordLabelClassifier;

impl LineLabelClassifier for KeywordLabelClassifier {
    fn balance_line_kind(&self, label: &str) -> Option<BalanceLineKind> {
        let label = label.to_lowercase();
        if label.contains("inventor") {
            Some(BalanceLineKind::Inventory)
        } else if label.contains("receivable") {
            Some(BalanceLineKind::Receivable)
        } else if label.contains("payable") {
            Some(BalanceLineKind::Payable)
        } else if label.contains("cash") {
            Some(BalanceLineKind::Cash)
        } else {
            None
        }
    }

    fn is_interest_line(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        label.contains("interest") || label.contains("finance")
    }

    fn is_depreciation_line(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        label.contains("depreciation") || label.contains("amortization")
    }
}
