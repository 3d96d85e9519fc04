//! Catalog entry models.
//!
//! A `CatalogEntry` is a single anime record. Fields used by the query engine
//! (popularity, recency, update day, rating) are optional and each one is
//! absent independently of the others.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Identifiers
// =============================================================================

/// Stable identifier of a catalog entry, assigned by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EntryId)
            .map_err(|_| format!("'{}' is not a valid entry id", s))
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Weekday on which new episodes of an entry are published.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateDay {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl UpdateDay {
    /// All days, Sunday first.
    pub const ALL: [UpdateDay; 7] = [
        UpdateDay::Sun,
        UpdateDay::Mon,
        UpdateDay::Tue,
        UpdateDay::Wed,
        UpdateDay::Thu,
        UpdateDay::Fri,
        UpdateDay::Sat,
    ];

    /// Parse a day tag. Accepts the short badge tags (`Su`, `M`, `Tu`, `W`,
    /// `Th`, `F`, `Sa`), three-letter names and full names, ignoring case.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "su" | "sun" | "sunday" => Some(UpdateDay::Sun),
            "m" | "mon" | "monday" => Some(UpdateDay::Mon),
            "tu" | "tue" | "tuesday" => Some(UpdateDay::Tue),
            "w" | "wed" | "wednesday" => Some(UpdateDay::Wed),
            "th" | "thu" | "thursday" => Some(UpdateDay::Thu),
            "f" | "fri" | "friday" => Some(UpdateDay::Fri),
            "sa" | "sat" | "saturday" => Some(UpdateDay::Sat),
            _ => None,
        }
    }

    /// Short badge tag
    pub fn short_tag(&self) -> &'static str {
        match self {
            UpdateDay::Sun => "Su",
            UpdateDay::Mon => "M",
            UpdateDay::Tue => "Tu",
            UpdateDay::Wed => "W",
            UpdateDay::Thu => "Th",
            UpdateDay::Fri => "F",
            UpdateDay::Sat => "Sa",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpdateDay::Sun => "Sunday",
            UpdateDay::Mon => "Monday",
            UpdateDay::Tue => "Tuesday",
            UpdateDay::Wed => "Wednesday",
            UpdateDay::Thu => "Thursday",
            UpdateDay::Fri => "Friday",
            UpdateDay::Sat => "Saturday",
        }
    }
}

impl fmt::Display for UpdateDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UpdateDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpdateDay::from_tag(s).ok_or_else(|| format!("'{}' is not a day of the week", s))
    }
}

/// Airing status shown by the admin manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiringStatus {
    Ongoing,
    Completed,
    Upcoming,
    Movie,
}

impl AiringStatus {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ongoing" => Some(AiringStatus::Ongoing),
            "completed" => Some(AiringStatus::Completed),
            "upcoming" => Some(AiringStatus::Upcoming),
            "movie" => Some(AiringStatus::Movie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiringStatus::Ongoing => "Ongoing",
            AiringStatus::Completed => "Completed",
            AiringStatus::Upcoming => "Upcoming",
            AiringStatus::Movie => "Movie",
        }
    }
}

impl FromStr for AiringStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiringStatus::from_str_loose(s).ok_or_else(|| {
            format!(
                "'{}' is not a valid status. Valid values are: Ongoing, Completed, Upcoming, Movie",
                s
            )
        })
    }
}

// =============================================================================
// Core Entities
// =============================================================================

/// A single anime record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub alternative_title: Option<String>,
    #[serde(default)]
    pub description: String,
    pub genres: Vec<String>,
    /// Lower is more popular, 1 is the top.
    #[serde(default)]
    pub popularity_rank: Option<u32>,
    #[serde(default)]
    pub last_update: Option<NaiveDate>,
    #[serde(default)]
    pub update_day: Option<UpdateDay>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub status: Option<AiringStatus>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub premiere: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatalogEntry {
    pub fn from_new(id: EntryId, new: NewEntry) -> Self {
        CatalogEntry {
            id,
            title: new.title,
            alternative_title: new.alternative_title,
            description: new.description,
            genres: new.genres,
            popularity_rank: new.popularity_rank,
            last_update: new.last_update,
            update_day: new.update_day,
            rating: new.rating,
            episode_count: new.episode_count,
            year: new.year,
            studio: new.studio,
            status: new.status,
            format: new.format,
            premiere: new.premiere,
            image: new.image,
        }
    }

    /// Popularity rank usable as a sort key. A rank of 0 counts as unranked.
    pub fn ranked_popularity(&self) -> Option<u32> {
        self.popularity_rank.filter(|rank| *rank >= 1)
    }

    /// Rating usable as a sort key. NaN, infinite and negative ratings count
    /// as unrated.
    pub fn ranked_rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite() && *r >= 0.0)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Data for an entry that has not been assigned an id yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEntry {
    pub title: String,
    pub alternative_title: Option<String>,
    pub description: String,
    pub genres: Vec<String>,
    pub popularity_rank: Option<u32>,
    pub last_update: Option<NaiveDate>,
    pub update_day: Option<UpdateDay>,
    pub rating: Option<f64>,
    pub episode_count: Option<u32>,
    pub year: Option<u16>,
    pub studio: Option<String>,
    pub status: Option<AiringStatus>,
    pub format: Option<String>,
    pub premiere: Option<NaiveDate>,
    pub image: Option<String>,
}

impl NewEntry {
    pub fn new<T: Into<String>>(title: T, genres: Vec<String>) -> Self {
        NewEntry {
            title: title.into(),
            genres,
            ..Default::default()
        }
    }
}

/// Partial update of an entry. `None` leaves a field untouched; for optional
/// fields `Some(None)` clears the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryUpdate {
    pub title: Option<String>,
    pub alternative_title: Option<Option<String>>,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub popularity_rank: Option<Option<u32>>,
    pub last_update: Option<Option<NaiveDate>>,
    pub update_day: Option<Option<UpdateDay>>,
    pub rating: Option<Option<f64>>,
    pub episode_count: Option<Option<u32>>,
    pub year: Option<Option<u16>>,
    pub studio: Option<Option<String>>,
    pub status: Option<Option<AiringStatus>>,
    pub format: Option<Option<String>>,
    pub premiere: Option<Option<NaiveDate>>,
    pub image: Option<Option<String>>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        *self == EntryUpdate::default()
    }

    /// Merge the provided fields into `entry`. The id is never touched.
    pub fn apply(self, entry: &mut CatalogEntry) {
        if let Some(v) = self.title {
            entry.title = v;
        }
        if let Some(v) = self.alternative_title {
            entry.alternative_title = v;
        }
        if let Some(v) = self.description {
            entry.description = v;
        }
        if let Some(v) = self.genres {
            entry.genres = v;
        }
        if let Some(v) = self.popularity_rank {
            entry.popularity_rank = v;
        }
        if let Some(v) = self.last_update {
            entry.last_update = v;
        }
        if let Some(v) = self.update_day {
            entry.update_day = v;
        }
        if let Some(v) = self.rating {
            entry.rating = v;
        }
        if let Some(v) = self.episode_count {
            entry.episode_count = v;
        }
        if let Some(v) = self.year {
            entry.year = v;
        }
        if let Some(v) = self.studio {
            entry.studio = v;
        }
        if let Some(v) = self.status {
            entry.status = v;
        }
        if let Some(v) = self.format {
            entry.format = v;
        }
        if let Some(v) = self.premiere {
            entry.premiere = v;
        }
        if let Some(v) = self.image {
            entry.image = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> CatalogEntry {
        CatalogEntry::from_new(
            EntryId(7),
            NewEntry {
                popularity_rank: Some(3),
                rating: Some(8.5),
                update_day: Some(UpdateDay::Fri),
                ..NewEntry::new("Neon Tokyo 2099", vec!["Cyberpunk".to_string()])
            },
        )
    }

    #[test]
    fn parses_day_tags() {
        assert_eq!(UpdateDay::from_tag("Su"), Some(UpdateDay::Sun));
        assert_eq!(UpdateDay::from_tag("m"), Some(UpdateDay::Mon));
        assert_eq!(UpdateDay::from_tag("Tuesday"), Some(UpdateDay::Tue));
        assert_eq!(UpdateDay::from_tag(" THU "), Some(UpdateDay::Thu));
        assert_eq!(UpdateDay::from_tag("sa"), Some(UpdateDay::Sat));
        assert_eq!(UpdateDay::from_tag("All"), None);
        assert_eq!(UpdateDay::from_tag(""), None);
    }

    #[test]
    fn day_tags_round_trip_through_short_tag() {
        for day in UpdateDay::ALL {
            assert_eq!(UpdateDay::from_tag(day.short_tag()), Some(day));
        }
    }

    #[test]
    fn parses_entry_id() {
        assert_eq!("42".parse::<EntryId>(), Ok(EntryId(42)));
        assert!("abc".parse::<EntryId>().is_err());
        assert!("-1".parse::<EntryId>().is_err());
    }

    #[test]
    fn zero_rank_and_bad_ratings_are_unranked() {
        let mut entry = make_entry();
        assert_eq!(entry.ranked_popularity(), Some(3));
        assert_eq!(entry.ranked_rating(), Some(8.5));

        entry.popularity_rank = Some(0);
        assert_eq!(entry.ranked_popularity(), None);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            entry.rating = Some(bad);
            assert_eq!(entry.ranked_rating(), None);
        }
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut entry = make_entry();
        let update = EntryUpdate {
            title: Some("Neon Osaka 2100".to_string()),
            popularity_rank: Some(None),
            ..Default::default()
        };
        update.apply(&mut entry);

        assert_eq!(entry.id, EntryId(7));
        assert_eq!(entry.title, "Neon Osaka 2100");
        assert_eq!(entry.popularity_rank, None);
        assert_eq!(entry.rating, Some(8.5));
        assert_eq!(entry.update_day, Some(UpdateDay::Fri));
        assert_eq!(entry.genres, vec!["Cyberpunk".to_string()]);
    }

    #[test]
    fn parses_entry_json_with_missing_optionals() {
        let s = r#"
        {
            "id": 3,
            "title": "Crimson Destiny",
            "genres": ["Action", "Martial Arts"],
            "last_update": "2024-01-21",
            "update_day": "Tue"
        }
        "#;
        match serde_json::from_str::<CatalogEntry>(s) {
            Ok(entry) => {
                assert_eq!(entry.id, EntryId(3));
                assert_eq!(entry.description, "");
                assert_eq!(entry.popularity_rank, None);
                assert_eq!(entry.last_update, NaiveDate::from_ymd_opt(2024, 1, 21));
                assert_eq!(entry.update_day, Some(UpdateDay::Tue));
            }
            Err(_) => assert!(false, "Did not parse json string."),
        }
    }
}
