//! The one place the HTTP surface is assembled.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so the
//! tests exercise the production middleware stack.

use std::time::Duration;

use axum::http::header::{
    ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE,
};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::auth::USER_ID_HEADER;
use crate::routes;
use crate::state::AppState;

/// Mount `/health` and the `/api` tree behind the shared middleware.
///
/// Layers, outermost first: CORS, request-id assignment, request tracing,
/// request-id echo, request timeout, panic recovery. The timeout only
/// bounds the time until response headers; a streamed video body may run
/// for as long as the player keeps reading.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured front-end origins.
///
/// Players send `Range` and read the range response headers, so both are
/// listed explicitly. An unparseable origin aborts startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            RANGE,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .expose_headers([CONTENT_RANGE, CONTENT_LENGTH, ACCEPT_RANGES])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
