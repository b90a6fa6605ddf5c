#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use yelpcamp_api::config::{ServerConfig, StoreBackend};
use yelpcamp_api::router::{build_app_service, AppService};
use yelpcamp_api::state::AppState;
use yelpcamp_api::views::Views;
use yelpcamp_db::{CampgroundStore, MemoryCampgroundStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        store_backend: StoreBackend::Memory,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application service over the given store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack (method override, request ID, error pages, panic
/// recovery).
pub fn build_test_app(store: Arc<MemoryCampgroundStore>) -> AppService {
    let config = test_config();
    let store: Arc<dyn CampgroundStore> = store;
    let state = AppState {
        store,
        views: Views::new().expect("views compile"),
        config: Arc::new(config.clone()),
    };
    build_app_service(state, &config)
}

/// A fresh, empty store plus an app serving it.
pub fn test_app() -> (AppService, Arc<MemoryCampgroundStore>) {
    let store = Arc::new(MemoryCampgroundStore::new());
    (build_test_app(Arc::clone(&store)), store)
}

pub async fn send(app: &AppService, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &AppService, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &AppService, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a URL-encoded form body; `fields` are `(key, value)` pairs.
pub async fn send_form(
    app: &AppService,
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: &AppService, uri: &str, fields: &[(&str, &str)]) -> Response {
    send_form(app, Method::POST, uri, fields).await
}

pub async fn put_form(app: &AppService, uri: &str, fields: &[(&str, &str)]) -> Response {
    send_form(app, Method::PUT, uri, fields).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Create a campground through the API and return its detail path.
pub async fn create_campground(app: &AppService, fields: &[(&str, &str)]) -> String {
    let response = post_form(app, "/campgrounds", fields).await;
    location(&response)
}
