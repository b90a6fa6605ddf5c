use axum::routing::get;
use axum::Router;

use crate::handlers::campground;
use crate::state::AppState;

/// Campground pages and mutations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(campground::new_form))
        .route(
            "/campgrounds",
            get(campground::index).post(campground::create),
        )
        .route(
            "/campgrounds/{id}",
            get(campground::show)
                .put(campground::update)
                .delete(campground::delete),
        )
        .route("/campgrounds/{id}/edit", get(campground::edit_form))
}
