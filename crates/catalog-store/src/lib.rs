//! catalog-store: storage layer for the book catalog service
//!
//! This crate provides:
//! - [`CatalogStore`], an ordered in-memory sequence of books keyed by id
//! - [`SharedCatalog`], a mutex-guarded handle for concurrent callers
//! - the seed records a freshly started catalog holds
//!
//! # Usage
//!
//! ```rust
//! use catalog_core::{Book, BookId};
//! use catalog_store::{CatalogStore, StoreError};
//!
//! let mut store = CatalogStore::seeded();
//! store.insert(Book::new(6, "Dune", "Herbert")).unwrap();
//!
//! assert_eq!(store.fetch_by_id(BookId(6)).unwrap().title, "Dune");
//! assert_eq!(
//!     store.insert(Book::new(6, "Dune", "Herbert")),
//!     Err(StoreError::DuplicateKey(BookId(6)))
//! );
//! ```

pub mod error;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use seed::seed_books;
pub use store::{CatalogStore, SharedCatalog};

// Re-export catalog-core for downstream crates
pub use catalog_core;
