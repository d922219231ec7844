//! View renderer
//!
//! All pages render through a single embedded Tera template set, so the
//! binary carries its templates and no template directory is needed at
//! runtime.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::error::AppResult;

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("error.html", include_str!("../templates/error.html")),
        ("genre_list.html", include_str!("../templates/genre_list.html")),
        (
            "genre_detail.html",
            include_str!("../templates/genre_detail.html"),
        ),
        ("genre_form.html", include_str!("../templates/genre_form.html")),
        (
            "genre_delete.html",
            include_str!("../templates/genre_delete.html"),
        ),
        (
            "bookinstance_list.html",
            include_str!("../templates/bookinstance_list.html"),
        ),
        (
            "bookinstance_detail.html",
            include_str!("../templates/bookinstance_detail.html"),
        ),
        (
            "bookinstance_form.html",
            include_str!("../templates/bookinstance_form.html"),
        ),
        (
            "bookinstance_delete.html",
            include_str!("../templates/bookinstance_delete.html"),
        ),
    ])
    .expect("embedded templates failed to parse");
    tera
});

/// Start a render context carrying the page title
pub fn page(title: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx
}

/// Render a template into an HTML response
pub fn render(template: &str, ctx: &Context) -> AppResult<Html<String>> {
    Ok(Html(TEMPLATES.render(template, ctx)?))
}

/// Render the generic error page.
///
/// Falls back to a plain-text body if the error template itself fails.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let mut ctx = page("Error");
    ctx.insert("status", &status.as_u16());
    ctx.insert("message", message);
    match TEMPLATES.render("error.html", &ctx) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {err}");
            (status, message.to_string()).into_response()
        }
    }
}
