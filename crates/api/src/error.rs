use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use yelpcamp_core::error::CoreError;

/// Message shown when an error carries no usable message of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Oh No, Something Went Wrong!";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Converting into a response does not render anything: it attaches an
/// [`ErrorPage`] marker that the error page middleware turns into HTML.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `yelpcamp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A view failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A request body that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Core(core) => StatusCode::from_u16(core.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user.
    ///
    /// Internal failures are replaced by [`DEFAULT_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            AppError::Core(core) => core.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) | AppError::Template(_) => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        ErrorPage::new(status, self.message()).into_response()
    }
}

/// Marker carried in response extensions for the error page middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The message to display; blank messages fall back to the default.
    pub fn display_message(&self) -> &str {
        if self.message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let mut response = self.status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
