//! Application router assembly.
//!
//! The binary and the integration suites build the same tower stack through
//! [`build_app_router`], so anything layered here is exercised by the
//! `tests/` suites without extra wiring.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble the service: health probe at the root, the versioned API under
/// `/api/v1`, and the shared middleware around both.
///
/// Axum applies `.layer` calls bottom-up, so a request passes CORS, then
/// request-id stamping, tracing, id propagation, and the timeout, with panic
/// recovery as the innermost guard before a handler runs.
pub fn build_app_router(state: AppState) -> Router {
    let cors = cors_from_config(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            MakeRequestUuid,
        ))
        .layer(cors)
        .with_state(state)
}

/// CORS layer from the configured origin allow-list.
///
/// A malformed origin panics during startup; the process must not come up
/// half-configured.
fn cors_from_config(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        let parsed = origin
            .parse()
            .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"));
        origins.push(parsed);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
