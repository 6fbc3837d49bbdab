use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    api::state::AppState,
    auth::{AuthService, SESSION_COOKIE},
    web::templates::HtmlTemplate,
};

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// GET /login
pub async fn login_page() -> impl IntoResponse {
    HtmlTemplate(LoginTemplate {
        username: String::new(),
        error: None,
    })
}

// POST /login
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth_service = &state.service_context.auth_service;

    let user_id = match auth_service.authenticate(&form.username, &form.password).await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            tracing::info!("Failed login attempt for {}", form.username.trim());
            return login_error(StatusCode::UNAUTHORIZED, form.username, "Invalid login credentials");
        }
        Err(e) => {
            tracing::error!("Login lookup failed: {}", e);
            return login_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                form.username,
                "Login is unavailable right now. Please try again later.",
            );
        }
    };

    let duration_hours = state.settings.auth.session_duration_hours;
    let token = match auth_service.create_session(user_id, duration_hours).await {
        Ok((_, token)) => token,
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            return login_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                form.username,
                "Login is unavailable right now. Please try again later.",
            );
        }
    };

    let cookie = AuthService::create_session_cookie(
        &token,
        state.settings.auth.secure_cookies,
        duration_hours,
    );

    (jar.add(cookie), Redirect::to("/admin")).into_response()
}

// POST /logout
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Err(e) = state.service_context.auth_service
            .invalidate_session(cookie.value())
            .await
        {
            tracing::warn!("Failed to delete session on logout: {}", e);
        }
    }

    (jar.add(AuthService::create_logout_cookie()), Redirect::to("/"))
}

fn login_error(status: StatusCode, username: String, message: &str) -> Response {
    (
        status,
        HtmlTemplate(LoginTemplate {
            username,
            error: Some(message.to_string()),
        }),
    ).into_response()
}
