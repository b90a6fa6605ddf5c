//! Request handlers, grouped by resource.

pub mod campground;
pub mod demo;

use yelpcamp_core::error::CoreError;

use crate::error::AppError;

/// Fallback for any unmatched path or method.
pub async fn not_found() -> AppError {
    CoreError::page_not_found().into()
}
