//! Update feed queries.

use super::filters::{DayFilter, UpdateOrder};
use crate::catalog::CatalogEntry;

/// Entries for the update feed.
///
/// `DayFilter::All` keeps only entries that carry a `last_update` date.
/// A specific day keeps entries whose `update_day` matches, dated or not.
/// Sorting is stable, so entries updated on the same date keep collection
/// order, and undated entries go after every dated one.
pub fn filter_by_day<'a>(
    entries: &'a [CatalogEntry],
    day: DayFilter,
    order: UpdateOrder,
) -> Vec<&'a CatalogEntry> {
    let mut results: Vec<&CatalogEntry> = match day {
        DayFilter::All => entries.iter().filter(|e| e.last_update.is_some()).collect(),
        DayFilter::Day(day) => entries
            .iter()
            .filter(|e| e.update_day == Some(day))
            .collect(),
    };

    if order == UpdateOrder::MostRecentFirst {
        // None < Some(_), so comparing b to a puts undated entries last.
        results.sort_by(|a, b| b.last_update.cmp(&a.last_update));
    }
    results
}

/// The most recently updated entries, newest first.
pub fn recent_updates(entries: &[CatalogEntry], limit: usize) -> Vec<&CatalogEntry> {
    let mut results = filter_by_day(entries, DayFilter::All, UpdateOrder::MostRecentFirst);
    results.truncate(limit);
    results
}
