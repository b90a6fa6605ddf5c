//! The single sink for failed requests.
//!
//! Handlers and extractors fail with [`AppError`](crate::error::AppError),
//! which leaves an [`ErrorPage`] marker on an otherwise empty response.
//! [`render_error_page`] wraps the whole router and turns that marker into
//! the HTML error view. Panics are converted into the same marker by
//! [`panic_response`], installed through `CatchPanicLayer::custom`.

use std::any::Any;

use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::{ErrorPage, DEFAULT_ERROR_MESSAGE};
use crate::views::Views;

/// Render any error response produced further down the stack.
///
/// Responses carrying an [`ErrorPage`] are rendered with its status and
/// message. Any other non-HTML error response, such as a framework
/// rejection or the request timeout, is rendered with the status's
/// canonical reason.
pub async fn render_error_page(
    State(views): State<Views>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if let Some(page) = response.extensions_mut().remove::<ErrorPage>() {
        return views.render_error(&page);
    }

    let status = response.status();
    if (status.is_client_error() || status.is_server_error()) && !is_html(response.headers()) {
        let message = status.canonical_reason().unwrap_or(DEFAULT_ERROR_MESSAGE);
        return views.render_error(&ErrorPage::new(status, message));
    }

    response
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

/// Convert a caught panic into a 500 error page marker.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    ErrorPage::new(StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_ERROR_MESSAGE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_html_content_counts_as_rendered() {
        let mut headers = HeaderMap::new();
        assert!(!is_html(&headers));
        headers.insert(CONTENT_TYPE, "text/plain; charset=utf-8".parse().unwrap());
        assert!(!is_html(&headers));
        headers.insert(CONTENT_TYPE, "text/html; charset=utf-8".parse().unwrap());
        assert!(is_html(&headers));
    }

    #[test]
    fn panic_payloads_become_500_markers() {
        let payloads: Vec<Box<dyn Any + Send>> = vec![
            Box::new("static message"),
            Box::new(String::from("owned message")),
            Box::new(42_u32),
        ];
        for payload in payloads {
            let response = panic_response(payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let page = response.extensions().get::<ErrorPage>().unwrap();
            assert_eq!(page.message, DEFAULT_ERROR_MESSAGE);
        }
    }
}
