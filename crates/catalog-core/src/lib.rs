//! catalog-core: shared types for the book catalog service.
//!
//! Used by the store, the HTTP server and the CLI client so that all three
//! agree on the wire shape of a [`Book`].

pub mod types;

pub use types::{Book, BookId};
