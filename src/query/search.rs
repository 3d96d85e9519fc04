//! Free-text search and genre filtering.
//!
//! Matching is a case-insensitive substring test over a small set of fields.
//! Results keep collection order; nothing here scores or re-sorts.

use super::filters::GenreFilter;
use crate::catalog::CatalogEntry;

/// Lowercased search term, folded once per query.
struct FoldedTerm(String);

impl FoldedTerm {
    fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            None
        } else {
            Some(FoldedTerm(term.to_lowercase()))
        }
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    fn found_in_any(&self, haystacks: &[String]) -> bool {
        haystacks.iter().any(|h| self.found_in(h))
    }
}

/// Typeahead search over titles and genres.
///
/// An empty term yields no suggestions at all. `limit` keeps the earliest
/// matches in collection order.
pub fn search<'a>(
    entries: &'a [CatalogEntry],
    term: &str,
    limit: Option<usize>,
) -> Vec<&'a CatalogEntry> {
    let term = match FoldedTerm::new(term) {
        Some(term) => term,
        None => return vec![],
    };

    entries
        .iter()
        .filter(|e| term.found_in(&e.title) || term.found_in_any(&e.genres))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Search page filter: term over title, description and genres, ANDed with
/// an exact genre tag. An empty term passes every entry through.
pub fn filter_by_genre_and_term<'a>(
    entries: &'a [CatalogEntry],
    term: &str,
    genre: &GenreFilter,
) -> Vec<&'a CatalogEntry> {
    let term = FoldedTerm::new(term);

    entries
        .iter()
        .filter(|e| match &term {
            Some(term) => {
                term.found_in(&e.title)
                    || term.found_in(&e.description)
                    || term.found_in_any(&e.genres)
            }
            None => true,
        })
        .filter(|e| genre.accepts(&e.genres))
        .collect()
}

/// Admin list filter: the term matches the title ignoring case, or the
/// alternative title verbatim. ANDed with an exact genre tag.
pub fn filter_by_title_and_genre<'a>(
    entries: &'a [CatalogEntry],
    term: &str,
    genre: &GenreFilter,
) -> Vec<&'a CatalogEntry> {
    let folded = FoldedTerm::new(term);

    entries
        .iter()
        .filter(|e| match &folded {
            Some(folded) => {
                folded.found_in(&e.title)
                    || e
                        .alternative_title
                        .as_deref()
                        .is_some_and(|alt| alt.contains(term))
            }
            None => true,
        })
        .filter(|e| genre.accepts(&e.genres))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{admin_seed, discovery_seed, EntryId, NewEntry};

    fn titles(results: &[&CatalogEntry]) -> Vec<String> {
        results.iter().map(|e| e.title.clone()).collect()
    }

    fn entry(id: u64, title: &str, genres: &[&str]) -> CatalogEntry {
        CatalogEntry::from_new(
            EntryId(id),
            NewEntry::new(title, genres.iter().map(|g| g.to_string()).collect()),
        )
    }

    #[test]
    fn empty_term_gives_no_suggestions() {
        let entries = discovery_seed();
        assert!(search(&entries, "", None).is_empty());
        assert!(search(&entries, "", Some(5)).is_empty());
        assert!(search(&entries, "", Some(0)).is_empty());
    }

    #[test]
    fn finds_title_case_insensitively() {
        let entries = vec![
            entry(1, "Azure Legends", &["Action"]),
            entry(2, "Mystic Chronicles", &["Fantasy"]),
        ];
        assert_eq!(
            titles(&search(&entries, "myst", None)),
            vec!["Mystic Chronicles"]
        );
        assert_eq!(
            titles(&search(&entries, "MYST", None)),
            vec!["Mystic Chronicles"]
        );
    }

    #[test]
    fn matches_genres_but_not_description() {
        let entries = discovery_seed();
        // "sorceress" only appears in a description.
        assert!(search(&entries, "sorceress", None).is_empty());

        let results = search(&entries, "cyber", None);
        assert_eq!(titles(&results), vec!["Neon Tokyo 2099"]);
    }

    #[test]
    fn limit_keeps_earliest_matches() {
        let entries = discovery_seed();
        let all = search(&entries, "action", None);
        assert_eq!(all.len(), 5);

        let limited = search(&entries, "action", Some(3));
        assert_eq!(limited.len(), 3);
        assert_eq!(titles(&limited), titles(&all[..3]));

        let generous = search(&entries, "action", Some(50));
        assert_eq!(generous.len(), 5);
    }

    #[test]
    fn browse_with_no_criteria_is_identity() {
        let entries = discovery_seed();
        let results = filter_by_genre_and_term(&entries, "", &GenreFilter::All);
        assert_eq!(results.len(), entries.len());
        for (result, original) in results.iter().zip(entries.iter()) {
            assert_eq!(result.id, original.id);
        }
    }

    #[test]
    fn browse_searches_descriptions() {
        let entries = discovery_seed();
        let results = filter_by_genre_and_term(&entries, "sorceress", &GenreFilter::All);
        assert_eq!(titles(&results), vec!["Mystic Chronicles"]);
    }

    #[test]
    fn browse_ands_term_and_genre() {
        let entries = discovery_seed();
        let genre = GenreFilter::parse("Action");
        let results = filter_by_genre_and_term(&entries, "dark", &genre);
        // "dark" shows up in three descriptions, only Royal Guardians is Action.
        assert_eq!(titles(&results), vec!["Royal Guardians"]);
    }

    #[test]
    fn browse_genre_tag_is_exact() {
        let entries = discovery_seed();
        let results = filter_by_genre_and_term(&entries, "", &GenreFilter::parse("Fantasy"));
        assert_eq!(
            titles(&results),
            vec![
                "Mystic Chronicles",
                "Azure Legends",
                "Dragon Heart Academy",
                "Royal Guardians"
            ]
        );
        // "Dark Fantasy" does not count as "Fantasy".
        assert!(results.iter().all(|e| e.title != "Shadow Realm"));
    }

    #[test]
    fn admin_filter_matches_alternative_title_verbatim() {
        let entries = admin_seed();
        let results = filter_by_title_and_genre(&entries, "鬼滅", &GenreFilter::All);
        assert_eq!(titles(&results), vec!["Demon Slayer"]);

        let results = filter_by_title_and_genre(&entries, "one", &GenreFilter::All);
        assert_eq!(titles(&results), vec!["One Piece"]);
    }

    #[test]
    fn admin_filter_ignores_description() {
        let entries = admin_seed();
        let results = filter_by_title_and_genre(&entries, "luffy", &GenreFilter::All);
        assert!(results.is_empty());
    }

    #[test]
    fn admin_filter_by_genre_only() {
        let entries = admin_seed();
        let results = filter_by_title_and_genre(&entries, "", &GenreFilter::parse("Drama"));
        assert_eq!(titles(&results), vec!["Attack on Titan", "Your Name"]);
    }

    #[test]
    fn queries_are_repeatable() {
        let entries = discovery_seed();
        let first: Vec<EntryId> = search(&entries, "a", Some(5)).iter().map(|e| e.id).collect();
        let second: Vec<EntryId> = search(&entries, "a", Some(5)).iter().map(|e| e.id).collect();
        assert_eq!(first, second);
    }
}
