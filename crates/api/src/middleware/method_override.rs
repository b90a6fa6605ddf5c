//! HTML forms can only submit GET and POST. A POST carrying
//! `_method=PUT|PATCH|DELETE` in its query string is dispatched as that
//! method instead.

use axum::extract::{Query, Request};
use axum::http::{Method, Uri};
use serde::Deserialize;

/// The `_method` query parameter naming the intended method.
#[derive(Debug, Deserialize)]
struct MethodOverride {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Rewrite the request method when a valid override is present.
pub fn override_method(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let Some(method) = requested_method(request.uri()) else {
        return request;
    };

    tracing::debug!(%method, uri = %request.uri(), "Overriding POST method");
    *request.method_mut() = method;
    request
}

fn requested_method(uri: &Uri) -> Option<Method> {
    let Query(params) = Query::<MethodOverride>::try_from_uri(uri).ok()?;
    let value = params.method?.to_ascii_uppercase();

    match value.as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
