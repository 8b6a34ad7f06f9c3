//! Application router: the `/health` probe, the versioned catalog API and
//! the HTTP middleware around both.
//!
//! The binary and the integration tests both go through
//! [`build_app_router`], so tests exercise the production stack.

use std::time::Duration;

use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Prefix every catalog route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the catalog service router.
///
/// Layers run outermost first:
///
/// | Layer              | Effect                                         |
/// |--------------------|------------------------------------------------|
/// | CORS               | answers preflights for the configured origins  |
/// | set request id     | assigns `x-request-id` when the client did not |
/// | trace              | one span per request, tagged with the id       |
/// | propagate id       | echoes `x-request-id` on the response          |
/// | timeout            | `408` after `request_timeout_secs`             |
/// | catch panic        | a panicking handler becomes a `500`            |
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(build_cors_layer(config))
        .map_response(axum::response::IntoResponse::into_response)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest(API_PREFIX, routes::api_routes())
        .layer(middleware)
        .with_state(state)
}

/// Span for one catalog request. Runs after the request id is assigned.
fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "catalog_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id,
    )
}

/// CORS for the catalog front end.
///
/// Origins are checked by [`ServerConfig::from_lookup`]; any that still fail
/// to parse are skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        match HeaderValue::from_str(origin) {
            Ok(value) => origins.push(value),
            Err(e) => tracing::warn!(%origin, error = %e, "Skipping invalid CORS origin"),
        }
    }

    // Mutations are POST/PUT/DELETE with JSON bodies; reset answers 303.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
