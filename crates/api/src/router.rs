//! The HTTP surface in one place: every route plus the tower-http layers
//! wrapped around them.
//!
//! `main.rs` and the integration suites under `tests/` both go through
//! [`build_app_router`], so tests see the same request ids, CORS answers and
//! timeouts as the running server.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
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

const REQUEST_ID_HEADER: &str = "x-request-id";

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Assemble the routes and wrap them in the middleware stack.
///
/// A request passes the layers outermost first: CORS, request-id
/// assignment, the tracing span, request-id echo on the response, the
/// timeout, and finally panic recovery right around the handlers. The
/// request id is assigned before the span opens so it is logged with it.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::app_routes());

    // `.layer` wraps everything added so far, so the list reads inside-out.
    routes
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the configured browser origins, with credentials allowed.
///
/// Panics on an origin that is not a valid header value; this runs once at
/// startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtConfig;
    use crate::config::StoreBackend;

    fn config_with_origins(origins: &[&str]) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
            request_timeout_secs: 5,
            store_backend: StoreBackend::Memory,
            database_url: None,
            jwt: JwtConfig {
                secret: "router-test-secret".to_string(),
                expiry_mins: 5,
            },
        }
    }

    #[test]
    fn valid_origins_build_a_layer() {
        build_cors_layer(&config_with_origins(&[
            "http://localhost:3000",
            "https://tunebox.example",
        ]));
    }

    #[test]
    #[should_panic(expected = "Invalid CORS origin")]
    fn invalid_origin_panics_at_startup() {
        build_cors_layer(&config_with_origins(&["http://bad\norigin"]));
    }
}
