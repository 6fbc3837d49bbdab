pub mod auth;

use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};

#[derive(Debug, Clone)]
pub struct UserInfo {
    pub username: String,
}

/// Inline status line shown above an admin panel after a form post.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: &'static str,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: "success", text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: "error", text: text.into() }
    }
}

/// Shared page for 403 and 404 responses.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub title: String,
    pub message: String,
}

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            ).into_response(),
        }
    }
}

pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        HtmlTemplate(ErrorPageTemplate {
            title: "Page not found".to_string(),
            message: "The page you are looking for does not exist.".to_string(),
        }),
    ).into_response()
}
