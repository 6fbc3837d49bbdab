use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    api::state::AppState,
    auth::SESSION_COOKIE,
    web::templates::{ErrorPageTemplate, HtmlTemplate},
};

/// The logged-in admin, inserted into request extensions by `require_admin`.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub username: String,
}

/// Gate for `/admin`. Anonymous or expired sessions are sent to the login
/// page; a valid session whose user has no profile row gets a 403.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(session_cookie) = jar.get(SESSION_COOKIE) else {
        return Redirect::to("/login").into_response();
    };

    let session = match state.service_context.auth_service
        .validate_session(session_cookie.value())
        .await
    {
        Ok(Some(session)) => session,
        Ok(None) => return Redirect::to("/login").into_response(),
        Err(e) => {
            tracing::error!("Session lookup failed: {}", e);
            return unavailable_page();
        }
    };

    let profile = match state.service_context.profile_repo
        .find_by_user_id(session.user_id)
        .await
    {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!("User {} has a session but no profile", session.user_id);
            return error_page(
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Your account does not have admin access.",
            );
        }
        Err(e) => {
            tracing::error!("Profile lookup failed for {}: {}", session.user_id, e);
            return unavailable_page();
        }
    };

    request.extensions_mut().insert(CurrentUser {
        username: profile.username,
    });

    next.run(request).await
}

fn unavailable_page() -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong",
        "The admin area is unavailable right now. Please try again later.",
    )
}

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    (
        status,
        HtmlTemplate(ErrorPageTemplate {
            title: title.to_string(),
            message: message.to_string(),
        }),
    ).into_response()
}
