//! Join of ledger entries with accepted classifications.

use std::collections::HashMap;

use finstat_shared::types::CanonicalAccountId;
use rust_decimal::Decimal;

use super::types::LineBalance;
use crate::ledger::LedgerEntry;
use crate::mapping::{Classification, SourceKey};
use crate::taxonomy::Taxonomy;

/// Sums the entries of accepted source accounts by statement line.
///
/// Entries without an accepted classification are left out. Entries with a
/// negative debit or credit are skipped with a warning. Lines are ordered by
/// their lowest canonical code, then label.
#[must_use]
pub fn group_balances(
    entries: &[LedgerEntry],
    classifications: &[Classification],
    taxonomy: &Taxonomy,
) -> Vec<LineBalance> {
    let targets: HashMap<SourceKey, CanonicalAccountId> = classifications
        .iter()
        .filter_map(|row| row.accepted_target().map(|target| (row.key(), target)))
        .collect();

    let mut lines: HashMap<String, LineBalance> = HashMap::new();

    for entry in entries {
        if entry.has_negative_amount() {
            tracing::warn!(
                entry_id = %entry.id,
                account_code = %entry.account_code,
                debit = %entry.debit,
                credit = %entry.credit,
                "skipping ledger entry with negative amount"
            );
            continue;
        }

        let key = SourceKey::new(&entry.account_code, &entry.account_name);
        let Some(account) = targets.get(&key).and_then(|id| taxonomy.get(*id)) else {
            continue;
        };

        let label = account.line_label();
        let line = lines
            .entry(label.to_string())
            .or_insert_with(|| LineBalance {
                label: label.to_string(),
                first_code: account.code.clone(),
                category: account.category,
                sub_category: account.sub_category.clone(),
                normal_balance: account.normal_balance,
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
                balance: Decimal::ZERO,
            });

        if account.code < line.first_code {
            line.first_code.clone_from(&account.code);
            line.category = account.category;
            line.sub_category.clone_from(&account.sub_category);
            line.normal_balance = account.normal_balance;
        }
        line.debit += entry.debit;
        line.credit += entry.credit;
        line.balance += entry.balance;
    }

    let mut lines: Vec<LineBalance> = lines.into_values().collect();
    lines.sort_by(|a, b| {
        a.first_code
            .cmp(&b.first_code)
            .then_with(|| a.label.cmp(&b.label))
    });
    lines
}
