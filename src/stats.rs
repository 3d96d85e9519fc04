//! Catalog statistics for the dashboard and genre pages.

use crate::catalog::{CatalogEntry, UpdateDay};
use crate::query::rank_by_rating;

#[derive(Debug, Clone)]
pub struct DashboardStats<'a> {
    pub total_entries: usize,
    pub rated_entries: usize,
    /// Mean over rated entries, rounded to one decimal. 0.0 when nothing is rated.
    pub average_rating: f64,
    pub top_rated: Vec<&'a CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

pub fn dashboard(entries: &[CatalogEntry], top_n: usize) -> DashboardStats<'_> {
    let ratings: Vec<f64> = entries.iter().filter_map(|e| e.ranked_rating()).collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        round_to_tenth(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    DashboardStats {
        total_entries: entries.len(),
        rated_entries: ratings.len(),
        average_rating,
        top_rated: rank_by_rating(entries, top_n),
    }
}

/// Rounds a non-negative value to one decimal, judging the stored binary
/// value rather than its decimal spelling: 8.85 is stored just below 8.85 and
/// gives 8.8. Exact halves such as 8.25 round up.
fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    // Exact rounding error of the multiplication.
    let error = value.mul_add(10.0, -scaled);
    let rounded = if scaled.fract() == 0.5 && error < 0.0 {
        scaled.floor()
    } else {
        scaled.round()
    };
    rounded / 10.0
}

/// Every genre tag in the catalog, deduplicated, in first-seen order.
pub fn distinct_genres(entries: &[CatalogEntry]) -> Vec<String> {
    genre_counts(entries).into_iter().map(|gc| gc.genre).collect()
}

/// Number of entries carrying each genre, in first-seen order. An entry that
/// lists a tag twice is counted once.
pub fn genre_counts(entries: &[CatalogEntry]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = vec![];
    for entry in entries {
        for (i, genre) in entry.genres.iter().enumerate() {
            if entry.genres[..i].contains(genre) {
                continue;
            }
            match counts.iter_mut().find(|gc| &gc.genre == genre) {
                Some(gc) => gc.count += 1,
                None => counts.push(GenreCount {
                    genre: genre.clone(),
                    count: 1,
                }),
            }
        }
    }
    counts
}

pub fn entries_in_genre<'a>(entries: &'a [CatalogEntry], genre: &str) -> Vec<&'a CatalogEntry> {
    entries.iter().filter(|e| e.has_genre(genre)).collect()
}

/// Entries per update day, Sunday first. Dates play no part here.
pub fn day_counts(entries: &[CatalogEntry]) -> Vec<(UpdateDay, usize)> {
    UpdateDay::ALL
        .iter()
        .map(|day| {
            let count = entries
                .iter()
                .filter(|e| e.update_day == Some(*day))
                .count();
            (*day, count)
        })
        .collect()
}
