use super::filters::{DayFilter, GenreFilter, UpdateOrder};
use super::{filter_by_day, filter_by_genre_and_term, search};
use crate::catalog::CatalogEntry;

/// Parameters owned by the active view. Results are always recomputed from
/// the entries passed in; nothing is cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub search_term: String,
    pub genre_filter: GenreFilter,
    pub day_filter: DayFilter,
    pub result_limit: Option<usize>,
}

impl QueryParams {
    fn limited<'a>(&self, mut results: Vec<&'a CatalogEntry>) -> Vec<&'a CatalogEntry> {
        if let Some(limit) = self.result_limit {
            results.truncate(limit);
        }
        results
    }

    /// Typeahead suggestions for the search bar.
    pub fn suggestions<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        search(entries, &self.search_term, self.result_limit)
    }

    /// Search page results.
    pub fn browse<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        self.limited(filter_by_genre_and_term(
            entries,
            &self.search_term,
            &self.genre_filter,
        ))
    }

    /// Update feed, newest first.
    pub fn updates<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        self.limited(filter_by_day(
            entries,
            self.day_filter,
            UpdateOrder::MostRecentFirst,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{discovery_seed, UpdateDay};

    #[test]
    fn default_params_browse_everything() {
        let entries = discovery_seed();
        let params = QueryParams::default();
        assert_eq!(params.browse(&entries).len(), entries.len());
        assert!(params.suggestions(&entries).is_empty());
        assert_eq!(params.updates(&entries).len(), entries.len());
    }

    #[test]
    fn suggestions_respect_limit() {
        let entries = discovery_seed();
        let params = QueryParams {
            search_term: "a".to_string(),
            result_limit: Some(5),
            ..Default::default()
        };
        assert_eq!(params.suggestions(&entries).len(), 5);
    }

    #[test]
    fn updates_use_day_filter() {
        let entries = discovery_seed();
        let params = QueryParams {
            day_filter: DayFilter::Day(UpdateDay::Tue),
            ..Default::default()
        };
        let ids: Vec<u64> = params.updates(&entries).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 10]);
    }

    #[test]
    fn browse_truncates_after_filtering() {
        let entries = discovery_seed();
        let params = QueryParams {
            genre_filter: GenreFilter::parse("Action"),
            result_limit: Some(2),
            ..Default::default()
        };
        let ids: Vec<u64> = params.browse(&entries).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
