//! Book catalog routes.
//!
//! - POST /books/ - Add a book (400 if the id is taken)
//! - GET /books/ - List all books in insertion order
//! - GET /books/{id} - Fetch one book (404 if absent)
//! - PUT /books/{id} - Replace a book's fields (404 if absent)
//! - DELETE /books/{id} - Remove a book and return it (404 if absent)
//!
//! `/books` without the trailing slash is routed identically.

use axum::{Json, Router, extract::State, routing::get};
use catalog_core::Book;

use crate::error::ApiResult;
use crate::extract::{BookBody, BookPath};
use crate::state::AppState;

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /books/ - Add a book.
///
/// # Response
///
/// - 200 OK: the stored book
/// - 400 Bad Request: a book with this id already exists
async fn create_book(
    State(state): State<AppState>,
    BookBody(book): BookBody,
) -> ApiResult<Json<Book>> {
    let book = state.catalog().insert(book).await.inspect_err(|e| {
        tracing::warn!(error = %e, "Failed to create book");
    })?;

    tracing::info!(book_id = %book.id, title = %book.title, "Book created");

    Ok(Json(book))
}

/// GET /books/ - List all books.
async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.catalog().list().await;

    tracing::debug!(count = books.len(), "Listed books");

    Json(books)
}

/// GET /books/{id} - Fetch a book.
///
/// # Response
///
/// - 200 OK: the book
/// - 404 Not Found: no book with this id
async fn get_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
) -> ApiResult<Json<Book>> {
    let book = state.catalog().fetch_by_id(id).await?;
    Ok(Json(book))
}

/// PUT /books/{id} - Replace a book's title, author and description.
///
/// The stored id never changes; an `id` in the body is ignored.
///
/// # Response
///
/// - 200 OK: the updated book
/// - 404 Not Found: no book with this id
async fn update_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
    BookBody(replacement): BookBody,
) -> ApiResult<Json<Book>> {
    let book = state
        .catalog()
        .update_by_id(id, replacement)
        .await
        .inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to update book");
        })?;

    tracing::info!(book_id = %book.id, "Book updated");

    Ok(Json(book))
}

/// DELETE /books/{id} - Remove a book.
///
/// # Response
///
/// - 200 OK: the removed book
/// - 404 Not Found: no book with this id
async fn delete_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
) -> ApiResult<Json<Book>> {
    let book = state.catalog().delete_by_id(id).await.inspect_err(|e| {
        tracing::warn!(error = %e, "Failed to delete book");
    })?;

    tracing::info!(book_id = %book.id, "Book deleted");

    Ok(Json(book))
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

// ============================================================================
// Tests
// ============================================================================
