//! Error types for the storage layer.

use catalog_core::BookId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during catalog operations.
///
/// A failed operation never modifies the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A book with this id is already stored.
    #[error("duplicate key: book {0} already exists")]
    DuplicateKey(BookId),

    /// No book with this id is stored.
    #[error("not found: book {0}")]
    NotFound(BookId),
}

impl StoreError {
    /// The id the failed operation referred to.
    pub fn book_id(&self) -> BookId {
        match self {
            Self::DuplicateKey(id) | Self::NotFound(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::DuplicateKey(BookId(3)).to_string(),
            "duplicate key: book 3 already exists"
        );
        assert_eq!(StoreError::NotFound(BookId(9)).to_string(), "not found: book 9");
    }

    #[test]
    fn test_error_book_id() {
        assert_eq!(StoreError::NotFound(BookId(9)).book_id(), BookId(9));
    }
}
