//! Request extractors that reject with [`ApiError`] JSON bodies instead of
//! axum's plain-text rejections.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use catalog_core::{Book, BookId};

use crate::error::ApiError;

/// The `{id}` path segment of a book route.
#[derive(Debug, Clone, Copy)]
pub struct BookPath(pub BookId);

impl<S> FromRequestParts<S> for BookPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected book id");
                ApiError::BadRequest("book id must be an integer".to_string())
            })?;

        Ok(Self(BookId(id)))
    }
}

/// A book record in the JSON request body.
#[derive(Debug, Clone)]
pub struct BookBody(pub Book);

impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(book) = Json::<Book>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
                other => ApiError::BadRequest(other.body_text()),
            })?;

        Ok(Self(book))
    }
}
