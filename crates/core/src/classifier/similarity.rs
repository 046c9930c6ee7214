//! Normalized string similarity.

use rust_decimal::Decimal;

/// Similarity of two strings in `[0, 1]`, derived from the Levenshtein
/// distance normalized by the longer string's character count.
///
/// Two empty strings are identical.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> Decimal {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return Decimal::ONE;
    }

    let distance = strsim::levenshtein(a, b);
    Decimal::ONE - Decimal::from(distance) / Decimal::from(longest)
}

/// Returns true if a non-empty lower-cased hint is contained in the
/// lower-cased category or sub-category.
#[must_use]
pub fn hint_matches(hint: &str, category: &str, sub_category: &str) -> bool {
    !hint.is_empty() && (category.contains(hint) || sub_category.contains(hint))
}
