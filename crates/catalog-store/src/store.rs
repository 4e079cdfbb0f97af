//! Main store implementation.
//!
//! [`CatalogStore`] owns the ordered sequence of books and performs every
//! lookup as a linear scan by id. [`SharedCatalog`] wraps it in a single
//! mutex for use from concurrent request handlers.

use std::sync::Arc;

use catalog_core::{Book, BookId};
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_books;

/// In-memory book catalog.
///
/// Books are kept in insertion order. Updates replace fields in place and
/// never reorder; deletes close the gap.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    books: Vec<Book>,
}

impl CatalogStore {
    /// Create a new, empty catalog.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a catalog holding the seed records.
    pub fn seeded() -> Self {
        Self { books: seed_books() }
    }

    /// Position of the first book with this id.
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Append a book.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if its id is already stored.
    pub fn insert(&mut self, book: Book) -> StoreResult<Book> {
        if self.contains(book.id) {
            tracing::debug!(book_id = %book.id, "Rejected duplicate book id");
            return Err(StoreError::DuplicateKey(book.id));
        }
        self.books.push(book.clone());
        Ok(book)
    }

    /// All books in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// The book with this id.
    pub fn fetch_by_id(&self, id: BookId) -> StoreResult<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace title, author and description of the book with this id.
    ///
    /// The stored id and position are kept; `replacement.id` is ignored.
    pub fn update_by_id(&mut self, id: BookId, replacement: Book) -> StoreResult<&Book> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        if replacement.id != id {
            tracing::warn!(
                book_id = %id,
                payload_id = %replacement.id,
                "Update payload id differs from path id; keeping stored id"
            );
        }
        self.books[index].replace_fields(replacement);
        Ok(&self.books[index])
    }

    /// Remove the book with this id and return it.
    pub fn delete_by_id(&mut self, id: BookId) -> StoreResult<Book> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.books.remove(index))
    }

    /// Whether a book with this id is stored.
    pub fn contains(&self, id: BookId) -> bool {
        self.position(id).is_some()
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Cloneable handle to a catalog shared between request handlers.
///
/// Each method holds the lock for exactly one store operation and returns
/// owned copies, so no reference into the catalog outlives the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogStore>>,
}

impl SharedCatalog {
    /// Wrap a catalog for shared access.
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CatalogStore::insert`].
    pub async fn insert(&self, book: Book) -> StoreResult<Book> {
        self.inner.lock().await.insert(book)
    }

    /// See [`CatalogStore::list`].
    pub async fn list(&self) -> Vec<Book> {
        self.inner.lock().await.list().to_vec()
    }

    /// See [`CatalogStore::fetch_by_id`].
    pub async fn fetch_by_id(&self, id: BookId) -> StoreResult<Book> {
        self.inner.lock().await.fetch_by_id(id).cloned()
    }

    /// See [`CatalogStore::update_by_id`].
    pub async fn update_by_id(&self, id: BookId, replacement: Book) -> StoreResult<Book> {
        self.inner
            .lock()
            .await
            .update_by_id(id, replacement)
            .cloned()
    }

    /// See [`CatalogStore::delete_by_id`].
    pub async fn delete_by_id(&self, id: BookId) -> StoreResult<Book> {
        self.inner.lock().await.delete_by_id(id)
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

impl From<CatalogStore> for SharedCatalog {
    fn from(store: CatalogStore) -> Self {
        Self::new(store)
    }
}
