//! Shared application router builder.
//!
//! Provides [`build_app_router`] and [`build_app_service`] so both the
//! production binary (`main.rs`) and integration tests (`tests/common/mod.rs`)
//! use the exact same middleware stack.

use std::time::Duration;

use axum::extract::Request;
use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::{error_page, method_override};
use crate::routes;
use crate::state::AppState;

/// The router wrapped in the pre-routing method override.
pub type AppService = MapRequest<Router, fn(Request) -> Request>;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Error page rendering
/// 5. Request timeout
/// 6. Panic recovery (catch panics, mark them as 500 error pages)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    routes::app_routes()
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and hand them to the error renderer.
        .layer(CatchPanicLayer::custom(error_page::panic_response))
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Render every error response as the HTML error view.
        .layer(axum::middleware::from_fn_with_state(
            state.views.clone(),
            error_page::render_error_page,
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // Shared state.
        .with_state(state)
}

/// Wrap the router so `_method` overrides apply before route matching.
///
/// Route-level middleware runs after a route is selected, so the override
/// has to sit outside the [`Router`].
pub fn build_app_service(state: AppState, config: &ServerConfig) -> AppService {
    let rewrite: fn(Request) -> Request = method_override::override_method;
    MapRequestLayer::new(rewrite).layer(build_app_router(state, config))
}
