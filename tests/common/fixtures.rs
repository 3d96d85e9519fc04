//! Catalog fixtures shared by the integration tests.

use super::constants::*;
use anime_catalog::catalog::{admin_seed, discovery_seed, CatalogEntry, EntryId, NewEntry, UpdateDay};

fn bare(id: u64, title: &str, genres: &[&str]) -> CatalogEntry {
    CatalogEntry::from_new(
        EntryId(id),
        NewEntry::new(title, genres.iter().map(|g| g.to_string()).collect()),
    )
}

/// Discovery and admin seeds merged, plus a few entries with missing or
/// unusable optional fields.
#[allow(dead_code)]
pub fn mixed_catalog() -> Vec<CatalogEntry> {
    let mut entries = discovery_seed();
    entries.extend(admin_seed().into_iter().map(|mut e| {
        e.id = EntryId(e.id.0 + ADMIN_ID_OFFSET);
        e
    }));

    entries.push(bare(BARE_ENTRY_ID, "Quiet Village", &["Slice of Life"]));

    let mut undated = bare(UNDATED_MONDAY_ID, "Monday Mecha", &["Mecha", "Action"]);
    undated.update_day = Some(UpdateDay::Mon);
    undated.popularity_rank = Some(3);
    undated.rating = Some(8.9);
    entries.push(undated);

    let mut broken = bare(BROKEN_KEYS_ID, "Glitch Hour", &["Sci-Fi"]);
    broken.popularity_rank = Some(0);
    broken.rating = Some(f64::NAN);
    entries.push(broken);

    entries
}

/// The titles of `entries`, in order.
#[allow(dead_code)]
pub fn titles(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.title.clone()).collect()
}

#[allow(dead_code)]
pub fn ids(entries: &[&CatalogEntry]) -> Vec<u64> {
    entries.iter().map(|e| e.id.0).collect()
}

/// A few search terms that hit titles, genres, or nothing.
#[allow(dead_code)]
pub const SEARCH_TERMS: &[&str] = &[
    "a", "myst", "ACTION", "fantasy", "dark", "one", "進撃", "zzz", " ",
];
