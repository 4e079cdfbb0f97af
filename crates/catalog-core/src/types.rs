//! Core data types for the book catalog.
//!
//! A [`Book`] is a flat record keyed by an externally supplied [`BookId`].
//! The same shape is used for request bodies, stored records and responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Identity key of a book.
///
/// Supplied by the client on create; the store never generates ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    /// Creates a BookId from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

// ============================================================================
// Book
// ============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identity key, unique within a catalog.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Free-form description. Serialized as `null` when absent.
    #[serde(default)]
    pub description: Option<String>,
}

impl Book {
    /// Creates a book without a description.
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
            author: author.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites title, author and description with those of `replacement`.
    ///
    /// `self.id` is left untouched; the replacement's id is ignored.
    pub fn replace_fields(&mut self, replacement: Book) {
        self.title = replacement.title;
        self.author = replacement.author;
        self.description = replacement.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_display_and_parse() {
        let id = BookId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<BookId>().unwrap(), id);
        assert_eq!(" 7 ".parse::<BookId>().unwrap(), BookId(7));
        assert!("abc".parse::<BookId>().is_err());
    }

    #[test]
    fn test_book_id_serializes_as_integer() {
        let json = serde_json::to_string(&BookId(6)).unwrap();
        assert_eq!(json, "6");
    }

    #[test]
    fn test_book_deserialize_without_description() {
        let json = r#"{"id": 6, "title": "Dune", "author": "Herbert"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book, Book::new(6, "Dune", "Herbert"));
    }

    #[test]
    fn test_book_serialize_includes_null_description() {
        let value = serde_json::to_value(Book::new(1, "1984", "George Orwell")).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "1984");
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_book_deserialize_missing_title_fails() {
        let json = r#"{"id": 6, "author": "Herbert"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let mut book = Book::new(6, "Dune", "Herbert").with_description("Spice");
        book.replace_fields(Book::new(99, "Dune (Revised)", "Frank Herbert"));

        assert_eq!(book.id, BookId(6));
        assert_eq!(book.title, "Dune (Revised)");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.description, None);
    }
}
