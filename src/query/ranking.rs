//! Popularity and rating rankings.
//!
//! Entries without a usable sort key (no rank, rank 0, missing, negative or
//! non-finite rating) are left out rather than compared.

use crate::catalog::CatalogEntry;

/// Entries ranked 1..=`max_rank`, best first. `None` means no cap.
/// Equal ranks keep collection order.
pub fn rank_by_popularity(entries: &[CatalogEntry], max_rank: Option<u32>) -> Vec<&CatalogEntry> {
    let mut ranked: Vec<(u32, &CatalogEntry)> = entries
        .iter()
        .filter_map(|e| e.ranked_popularity().map(|rank| (rank, e)))
        .filter(|(rank, _)| max_rank.map_or(true, |max| *rank <= max))
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, e)| e).collect()
}

/// The `top_n` highest rated entries. Equal ratings keep collection order.
pub fn rank_by_rating(entries: &[CatalogEntry], top_n: usize) -> Vec<&CatalogEntry> {
    let mut rated: Vec<(f64, &CatalogEntry)> = entries
        .iter()
        .filter_map(|e| e.ranked_rating().map(|rating| (rating, e)))
        .collect();

    rated.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    rated.into_iter().take(top_n).map(|(_, e)| e).collect()
}
