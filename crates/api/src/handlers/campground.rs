//! Handlers for the `/campgrounds` resource.
//!
//! Mutations redirect back to an HTML page; reads render a view.

use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::response::{Html, Redirect};
use minijinja::context;
use yelpcamp_core::error::CoreError;
use yelpcamp_db::models::campground::Campground;

use crate::error::{AppError, AppResult};
use crate::form::ValidatedCampground;
use crate::state::AppState;

/// The `{id}` path segment of a campground route.
///
/// A segment axum cannot decode (e.g. invalid UTF-8) names no campground,
/// so it is rejected as not found rather than as a bad request.
pub struct CampgroundId(pub String);

impl<S> FromRequestParts<S> for CampgroundId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Undecodable campground id");
                Err(CoreError::campground_not_found().into())
            }
        }
    }
}

async fn find_or_404(state: &AppState, id: &str) -> AppResult<Campground> {
    let campground = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(CoreError::campground_not_found)?;
    Ok(campground)
}

fn show_path(campground: &Campground) -> String {
    format!("/campgrounds/{}", campground.id)
}

/// GET /campgrounds
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let campgrounds = state.store.list_all().await?;
    state
        .views
        .render("campgrounds/index", context! { campgrounds => campgrounds })
}

/// GET /new
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render("campgrounds/new", context! {})
}

/// GET /campgrounds/{id}
pub async fn show(
    State(state): State<AppState>,
    CampgroundId(id): CampgroundId,
) -> AppResult<Html<String>> {
    let campground = find_or_404(&state, &id).await?;
    state
        .views
        .render("campgrounds/show", context! { campground => campground })
}

/// GET /campgrounds/{id}/edit
///
/// Missing campgrounds are a 404, same as the detail page.
pub async fn edit_form(
    State(state): State<AppState>,
    CampgroundId(id): CampgroundId,
) -> AppResult<Html<String>> {
    let campground = find_or_404(&state, &id).await?;
    state
        .views
        .render("campgrounds/edit", context! { campground => campground })
}

/// POST /campgrounds
pub async fn create(
    State(state): State<AppState>,
    form: ValidatedCampground,
) -> AppResult<Redirect> {
    let input = form.into_create()?;
    let campground = state.store.create(&input).await?;
    tracing::info!(id = %campground.id, title = %campground.title, "Campground created");
    Ok(Redirect::to(&show_path(&campground)))
}

/// PUT /campgrounds/{id}
pub async fn update(
    State(state): State<AppState>,
    CampgroundId(id): CampgroundId,
    form: ValidatedCampground,
) -> AppResult<Redirect> {
    let input = form.into_update()?;
    let campground = state
        .store
        .update(&id, &input)
        .await?
        .ok_or_else(CoreError::campground_not_found)?;
    tracing::info!(id = %campground.id, "Campground updated");
    Ok(Redirect::to(&show_path(&campground)))
}

/// DELETE /campgrounds/{id}
///
/// Idempotent: deleting a missing campground still redirects to the list.
pub async fn delete(
    State(state): State<AppState>,
    CampgroundId(id): CampgroundId,
) -> AppResult<Redirect> {
    let deleted = state.store.delete(&id).await?;
    tracing::info!(%id, deleted, "Campground delete requested");
    Ok(Redirect::to("/campgrounds"))
}
