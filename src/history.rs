//! History lookups over a user's logged entries.
//!
//! Both functions assume the slice is already ordered most recent first,
//! which is how the repository returns it. They only filter and scan; the
//! relative order of the input is preserved.

use crate::models::{Category, Record};

/// Entries belonging to one body region, most recent first.
pub fn in_category(records: &[Record], category: Category) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| record.category == category)
        .collect()
}

/// The most recent prior attempt at an exercise within one body region.
///
/// Name matching is case-insensitive, so typing "squats" finds an entry
/// logged as "Squats". Returns `None` when the exercise has never been
/// logged in that region.
pub fn latest_attempt<'a>(
    records: &'a [Record],
    name: &str,
    category: Category,
) -> Option<&'a Record> {
    let wanted = name.to_lowercase();
    records
        .iter()
        .find(|record| record.category == category && record.name.to_lowercase() == wanted)
}
