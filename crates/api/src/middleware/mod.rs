//! Request/response middleware.
//!
//! - [`method_override`] -- rewrites `POST ?_method=PUT|PATCH|DELETE` before routing.
//! - [`error_page`] -- renders error responses and recovers from panics.

pub mod error_page;
pub mod method_override;
