/// Domain-level error shared by every crate in the workspace.
///
/// Each variant carries the human-readable message shown on the error page.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl CoreError {
    /// The "Campground Not Found" lookup failure.
    pub fn campground_not_found() -> Self {
        CoreError::NotFound("Campground Not Found".to_string())
    }

    /// The catch-all failure for unmatched routes.
    pub fn page_not_found() -> Self {
        CoreError::NotFound("Page Not Found".to_string())
    }

    /// HTTP status code associated with this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::NotFound(_) => 404,
            CoreError::Validation(_) => 400,
            CoreError::Unauthorized(_) => 401,
        }
    }
}
