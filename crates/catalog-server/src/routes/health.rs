//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Number of books currently in the catalog.
    pub books: usize,
}

/// GET /health - Liveness plus catalog size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        books: state.catalog().len().await,
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState::from_config(ServerConfig::default());
        let response = health_check(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.books, 5);
    }
}
