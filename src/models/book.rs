//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier (0 while unassigned)
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication year (never 0)
    pub year: i64,
}

/// Create / update book request
///
/// Both verbs take the full set of mutable fields; there is no partial update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_year"))]
pub struct BookPayload {
    #[validate(
        length(min = 1, message = "Title is required"),
        custom(function = "no_trailing_space")
    )]
    pub title: String,
    #[validate(
        length(min = 1, message = "Author is required"),
        custom(function = "no_trailing_space")
    )]
    pub author: String,
    pub year: i64,
}

impl BookPayload {
    /// Build the domain value, using `id` as the target record (0 for a new book)
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
        }
    }
}

fn no_trailing_space(value: &str) -> Result<(), ValidationError> {
    if value.ends_with(' ') {
        let mut err = ValidationError::new("trailing_space");
        err.message = Some("must not end with a space".into());
        return Err(err);
    }
    Ok(())
}

fn validate_year(payload: &BookPayload) -> Result<(), ValidationError> {
    if payload.year == 0 {
        let mut err = ValidationError::new("year_required");
        err.message = Some("Year is required".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, author: &str, year: i64) -> BookPayload {
        BookPayload {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload("Book One", "Author A", 2021).validate().is_ok());
        assert!(payload("Old", "Anon", -300).validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(payload("", "Author A", 2021).validate().is_err());
        assert!(payload("Book One", "", 2021).validate().is_err());
    }

    #[test]
    fn test_rejects_trailing_space() {
        assert!(payload(" ", "testAuthor", 2025).validate().is_err());
        assert!(payload("Book One", "Author A ", 2021).validate().is_err());
        assert!(payload(" Leading", "Author A", 2021).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_year() {
        assert!(payload("testTitle", "testAuthor", 0).validate().is_err());
    }

    #[test]
    fn test_into_book_keeps_target_id() {
        let book = payload("Updated Book One", "Updated Author A", 2030).into_book(1);
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Updated Book One");
        assert_eq!(book.year, 2030);
    }
}
