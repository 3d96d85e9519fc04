//! Validation for catalog entries.
//!
//! Entries are checked before they are added to or updated in the store.
//! Every offending field is reported at once, so the caller can show a single
//! blocking notice.

use super::models::{CatalogEntry, NewEntry};
use std::fmt;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    ValidationFailed { fields: Vec<&'static str> },
}

impl ValidationError {
    pub fn fields(&self) -> &[&'static str] {
        match self {
            ValidationError::ValidationFailed { fields } => fields,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ValidationFailed { fields } => {
                write!(f, "Invalid or missing fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

fn check_fields(
    title: &str,
    genres: &[String],
    rating: Option<f64>,
    popularity_rank: Option<u32>,
) -> ValidationResult<()> {
    let mut fields = Vec::new();

    if title.trim().is_empty() {
        fields.push("title");
    }
    if genres.is_empty() || genres.iter().any(|g| g.trim().is_empty()) {
        fields.push("genres");
    }
    if let Some(rating) = rating {
        if !rating.is_finite() || rating < 0.0 {
            fields.push("rating");
        }
    }
    if popularity_rank == Some(0) {
        fields.push("popularity_rank");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ValidationFailed { fields })
    }
}

/// Validate an entry about to be added
pub fn validate_new_entry(entry: &NewEntry) -> ValidationResult<()> {
    check_fields(
        &entry.title,
        &entry.genres,
        entry.rating,
        entry.popularity_rank,
    )
}

/// Validate an entry after an update has been merged into it
pub fn validate_entry(entry: &CatalogEntry) -> ValidationResult<()> {
    check_fields(
        &entry.title,
        &entry.genres,
        entry.rating,
        entry.popularity_rank,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_valid_entry() -> NewEntry {
        NewEntry {
            rating: Some(8.4),
            ..NewEntry::new("Your Name", vec!["Romance".to_string()])
        }
    }

    #[test]
    fn test_valid_entry() {
        assert!(validate_new_entry(&make_valid_entry()).is_ok());
    }

    #[test]
    fn test_blank_title() {
        let mut entry = make_valid_entry();
        entry.title = "   ".to_string();
        let err = validate_new_entry(&entry).unwrap_err();
        assert_eq!(err.fields(), &["title"]);
    }

    #[test]
    fn test_no_genres() {
        let mut entry = make_valid_entry();
        entry.genres.clear();
        let err = validate_new_entry(&entry).unwrap_err();
        assert_eq!(err.fields(), &["genres"]);
    }

    #[test]
    fn test_blank_genre_tag() {
        let mut entry = make_valid_entry();
        entry.genres.push("".to_string());
        let err = validate_new_entry(&entry).unwrap_err();
        assert_eq!(err.fields(), &["genres"]);
    }

    #[test]
    fn test_reports_every_offending_field() {
        let entry = NewEntry {
            rating: Some(f64::NAN),
            popularity_rank: Some(0),
            ..NewEntry::new("", vec![])
        };
        let err = validate_new_entry(&entry).unwrap_err();
        assert_eq!(
            err.fields(),
            &["title", "genres", "rating", "popularity_rank"]
        );
        assert_eq!(
            err.to_string(),
            "Invalid or missing fields: title, genres, rating, popularity_rank"
        );
    }

    #[test]
    fn test_negative_rating() {
        let mut entry = make_valid_entry();
        entry.rating = Some(-0.5);
        let err = validate_new_entry(&entry).unwrap_err();
        assert_eq!(err.fields(), &["rating"]);
    }
}
