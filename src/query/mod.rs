//! Catalog query engine.
//!
//! Pure functions from a slice of entries and a few parameters to the
//! ordered subset a view displays. They never mutate their input and never
//! fail; empty input gives empty (or pass-through) output.

mod filters;
mod params;
mod ranking;
mod search;
mod updates;

pub use filters::{DayFilter, GenreFilter, UpdateOrder};
pub use params::QueryParams;
pub use ranking::{rank_by_popularity, rank_by_rating};
pub use search::{filter_by_genre_and_term, filter_by_title_and_genre, search};
pub use updates::{filter_by_day, recent_updates};
