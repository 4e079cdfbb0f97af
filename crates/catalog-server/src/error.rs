//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_store::StoreError;
use serde::{Deserialize, Serialize};

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed body that does not describe a book (422).
    #[error("unprocessable entity: {0}")]
    Unprocessable(String),

    /// Catalog error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unprocessable(_) => "UNPROCESSABLE_ENTITY",
            Self::Store(StoreError::DuplicateKey(_)) => "DUPLICATE_KEY",
            Self::Store(StoreError::NotFound(_)) => "NOT_FOUND",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(StoreError::DuplicateKey(_)) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Store(StoreError::DuplicateKey(_)) => {
                "Book with this ID already exists.".to_string()
            }
            Self::Store(StoreError::NotFound(_)) => "Book not found.".to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "DUPLICATE_KEY").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::BookId;

    #[test]
    fn test_store_errors_map_to_status() {
        let duplicate = ApiError::from(StoreError::DuplicateKey(BookId(1)));
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(duplicate.code(), "DUPLICATE_KEY");
        assert_eq!(duplicate.message(), "Book with this ID already exists.");

        let missing = ApiError::from(StoreError::NotFound(BookId(9)));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.code(), "NOT_FOUND");
        assert_eq!(missing.message(), "Book not found.");
    }

    #[test]
    fn test_bad_request_message() {
        let err = ApiError::BadRequest("invalid book id".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "bad request: invalid book id");
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "NOT_FOUND".to_string(),
                message: "Book not found.".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Book not found.");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(StoreError::NotFound(BookId(9))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
