//! Row normalization for ledger intake.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::entry::LedgerRecord;
use super::error::LedgerError;

/// A row that was skipped during intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRejection {
    /// Zero-based position in the submitted list.
    pub row: usize,
    /// Trimmed account code.
    pub account_code: String,
    /// Trimmed account name.
    pub account_name: String,
    /// Why the row was rejected.
    pub reason: String,
}

impl From<&RowRejection> for LedgerError {
    fn from(rejection: &RowRejection) -> Self {
        Self::invalid_row(rejection.row, rejection.reason.clone())
    }
}

/// Result of [`normalize_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedLedger {
    /// Unique rows with a resolved balance.
    pub records: Vec<LedgerRecord>,
    /// Rows without code and name.
    pub skipped_empty: usize,
    /// Rows that replaced an earlier row with the same identity.
    pub duplicates_replaced: usize,
    /// Rows rejected by validation.
    pub rejected: Vec<RowRejection>,
}

/// Checks a single trimmed row.
///
/// # Errors
///
/// Returns an error if the debit or credit amount is negative.
pub fn validate_record(row: usize, record: &LedgerRecord) -> Result<(), LedgerError> {
    if record.debit < Decimal::ZERO {
        return Err(LedgerError::invalid_row(row, "debit amount cannot be negative"));
    }
    if record.credit < Decimal::ZERO {
        return Err(LedgerError::invalid_row(row, "credit amount cannot be negative"));
    }
    Ok(())
}

/// Normalizes a submitted record list.
///
/// Codes, names and hints are trimmed, rows with neither code nor name are
/// dropped, rows with negative amounts are rejected, and a missing balance
/// defaults to `debit - credit`. Rows sharing an identity (code, or name when
/// the code is empty) collapse to the last occurrence, kept at the position
/// of the first.
#[must_use]
pub fn normalize_records(records: Vec<LedgerRecord>) -> NormalizedLedger {
    let mut result = NormalizedLedger::default();
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for (row, record) in records.into_iter().enumerate() {
        let record = trim_record(record);

        if record.account_code.is_empty() && record.account_name.is_empty() {
            result.skipped_empty += 1;
            continue;
        }

        if let Err(LedgerError::InvalidRow { reason, .. }) = validate_record(row, &record) {
            result.rejected.push(RowRejection {
                row,
                account_code: record.account_code,
                account_name: record.account_name,
                reason,
            });
            continue;
        }

        let key = record.identity().to_string();
        if let Some(&position) = positions.get(&key) {
            result.records[position] = record;
            result.duplicates_replaced += 1;
        } else {
            positions.insert(key, result.records.len());
            result.records.push(record);
        }
    }

    result
}

fn trim_record(record: LedgerRecord) -> LedgerRecord {
    let balance = Some(record.net_balance());
    LedgerRecord {
        account_code: record.account_code.trim().to_string(),
        account_name: record.account_name.trim().to_string(),
        type_hint: record
            .type_hint
            .map(|hint| hint.trim().to_string())
            .filter(|hint| !hint.is_empty()),
        debit: record.debit,
        credit: record.credit,
        balance,
    }
}
