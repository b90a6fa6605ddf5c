//! Server-side view rendering.
//!
//! Templates live in `crates/api/views` and are compiled into the binary.
//! Every view is HTML-escaped regardless of its name.

use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::error::{AppResult, ErrorPage};

const TEMPLATES: &[(&str, &str)] = &[
    (
        "layouts/boilerplate",
        include_str!("../views/layouts/boilerplate.html"),
    ),
    ("partials/navbar", include_str!("../views/partials/navbar.html")),
    ("partials/footer", include_str!("../views/partials/footer.html")),
    ("home", include_str!("../views/home.html")),
    ("error", include_str!("../views/error.html")),
    (
        "campgrounds/index",
        include_str!("../views/campgrounds/index.html"),
    ),
    (
        "campgrounds/show",
        include_str!("../views/campgrounds/show.html"),
    ),
    (
        "campgrounds/new",
        include_str!("../views/campgrounds/new.html"),
    ),
    (
        "campgrounds/edit",
        include_str!("../views/campgrounds/edit.html"),
    ),
];

/// Compiled template environment, shared across requests.
#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    /// Compile every embedded template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    /// Render the named view with the given context.
    pub fn render<C: Serialize>(&self, name: &str, ctx: C) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }

    /// Render the generic error view for `page`.
    ///
    /// Falls back to a plain-text body if the error view itself fails.
    pub fn render_error(&self, page: &ErrorPage) -> Response {
        let status = page.status;
        let message = page.display_message();
        let ctx = context! {
            err => context! {
                statusCode => status.as_u16(),
                message => message,
            },
        };

        match self.render("error", ctx) {
            Ok(html) => (status, html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render error view");
                (status, format!("{} {message}", status.as_u16())).into_response()
            }
        }
    }
}
