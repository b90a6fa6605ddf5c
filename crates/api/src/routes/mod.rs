pub mod campground;
pub mod demo;
pub mod health;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                GET home page
/// /new                             GET creation form
/// /campgrounds                     GET list, POST create
/// /campgrounds/{id}                GET detail, PUT update, DELETE delete
/// /campgrounds/{id}/edit           GET edit form
///
/// /dogs                            GET static text
/// /error                           GET deliberate fault
/// /secret?password=...             GET password-gated text
///
/// /health                          GET store health (JSON)
/// *                                404 Page Not Found
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(demo::router())
        .merge(campground::router())
        .merge(health::router())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
}
