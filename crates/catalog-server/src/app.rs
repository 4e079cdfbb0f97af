//! Assembly of the router and its middleware stack.

use axum::{Router, body::Body};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::middleware::request_id::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::routes;
use crate::state::AppState;

/// Build the application: routes plus request id, CORS and tracing layers.
///
/// Each `layer` call wraps everything added before it, so requests pass
/// through request id assignment, CORS, request id propagation and finally
/// the per-request trace span.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(state.config())?;

    Ok(routes::build_router(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
        .layer(propagate_request_id_layer())
        .layer(cors)
        .layer(set_request_id_layer()))
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let origin = match config.cors_origins()? {
        None => AllowOrigin::from(Any),
        Some(origins) => AllowOrigin::list(origins),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
