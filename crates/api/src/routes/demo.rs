use axum::routing::get;
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

/// Home page and the demo endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(demo::home))
        .route("/dogs", get(demo::dogs))
        .route("/error", get(demo::fault))
        .route("/secret", get(demo::secret))
}
