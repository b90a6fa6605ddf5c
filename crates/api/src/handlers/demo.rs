//! Demo endpoints: a static page, a text response, a deliberate fault and
//! a query-string "password" check. None of these are security features.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use minijinja::context;
use yelpcamp_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// Password accepted by `/secret`.
pub const SECRET_PASSWORD: &str = "chickennugget";

/// Body returned by `/secret` for the right password.
pub const SECRET_MESSAGE: &str = "MY SECRET IS: Some xxxxxx";

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render("home", context! {})
}

/// GET /dogs
pub async fn dogs() -> &'static str {
    tracing::info!(request_time = %chrono::Utc::now().to_rfc3339(), "Dogs requested");
    "WOOF"
}

/// GET /error -- panics on purpose to exercise panic recovery.
pub async fn fault() -> &'static str {
    panic!("deliberate fault triggered by GET /error");
}

/// GET /secret?password=...
pub async fn secret(
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<(StatusCode, &'static str)> {
    verify_password(params.get("password").map(String::as_str))?;
    Ok((StatusCode::OK, SECRET_MESSAGE))
}

fn verify_password(password: Option<&str>) -> Result<(), CoreError> {
    match password {
        Some(SECRET_PASSWORD) => Ok(()),
        _ => Err(CoreError::Unauthorized(
            "SORRY YOU NEED A PASSWORD!!!".to_string(),
        )),
    }
}
