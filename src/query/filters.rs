//! Filter parameter types.
//!
//! Both filters use an "All" sentinel meaning no restriction on that
//! dimension. What "no restriction" passes through is decided by each
//! query operation, see `filter_by_day`.

use crate::catalog::UpdateDay;
use std::fmt;
use std::str::FromStr;

const ALL_SENTINEL: &str = "All";

fn is_all_sentinel(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Genre restriction. Tags are matched exactly, case included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn parse(s: &str) -> Self {
        if is_all_sentinel(s) {
            GenreFilter::All
        } else {
            GenreFilter::Only(s.trim().to_string())
        }
    }

    pub fn accepts(&self, genres: &[String]) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(tag) => genres.iter().any(|g| g == tag),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GenreFilter::parse(s))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "{}", ALL_SENTINEL),
            GenreFilter::Only(tag) => write!(f, "{}", tag),
        }
    }
}

/// Update day restriction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DayFilter {
    #[default]
    All,
    Day(UpdateDay),
}

impl FromStr for DayFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_sentinel(s) {
            return Ok(DayFilter::All);
        }
        s.parse::<UpdateDay>().map(DayFilter::Day)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "{}", ALL_SENTINEL),
            DayFilter::Day(day) => write!(f, "{}", day),
        }
    }
}

/// Ordering applied by `filter_by_day`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Keep collection order.
    SourceOrder,
    /// Most recent `last_update` first; undated entries last.
    #[default]
    MostRecentFirst,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_genre_filter() {
        assert_eq!(GenreFilter::parse("All"), GenreFilter::All);
        assert_eq!(GenreFilter::parse("all"), GenreFilter::All);
        assert_eq!(GenreFilter::parse(""), GenreFilter::All);
        assert_eq!(
            GenreFilter::parse("Slice of Life"),
            GenreFilter::Only("Slice of Life".to_string())
        );
    }

    #[test]
    fn genre_filter_is_case_sensitive() {
        let genres = vec!["Action".to_string(), "Drama".to_string()];
        assert!(GenreFilter::All.accepts(&genres));
        assert!(GenreFilter::parse("Action").accepts(&genres));
        assert!(!GenreFilter::parse("action").accepts(&genres));
        assert!(!GenreFilter::parse("Act").accepts(&genres));
        assert!(!GenreFilter::parse("Action").accepts(&[]));
    }

    #[test]
    fn parses_day_filter() {
        assert_eq!("All".parse::<DayFilter>(), Ok(DayFilter::All));
        assert_eq!("Th".parse::<DayFilter>(), Ok(DayFilter::Day(UpdateDay::Thu)));
        assert_eq!(
            "saturday".parse::<DayFilter>(),
            Ok(DayFilter::Day(UpdateDay::Sat))
        );
        assert!("someday".parse::<DayFilter>().is_err());
    }
}
