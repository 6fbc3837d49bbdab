#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use ctrlxploit::{
    api::state::AppState,
    auth::AuthService,
    config::Settings,
    repository::ProfileRepository,
    service::ServiceContext,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tokio::net::TcpListener;

/// In-memory database with migrations applied. A single connection keeps
/// every query on the same memory database.
pub async fn test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

pub async fn test_app() -> anyhow::Result<(Router, AppState, SqlitePool)> {
    let pool = test_pool().await?;
    let settings = Settings::default();

    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        settings.auth.email_domain.clone(),
    ));
    let service_context = Arc::new(ServiceContext::new(
        pool.clone(),
        auth_service,
        reqwest::Client::builder().no_proxy().build()?,
    ));

    let state = AppState::new(service_context, Arc::new(settings));
    let app = ctrlxploit::build_app(state.clone());

    Ok((app, state, pool))
}

/// Creates an admin (user + profile) and returns a `Cookie` header value
/// carrying a live session for it.
pub async fn admin_cookie(state: &AppState, username: &str) -> anyhow::Result<String> {
    let ctx = &state.service_context;
    let user_id = ctx.auth_service.create_user(username, "hunter22").await?;
    ctx.profile_repo.create(user_id, username).await?;
    let (_, token) = ctx.auth_service.create_session(user_id, 1).await?;
    Ok(format!("session={}", token))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `application/x-www-form-urlencoded` body for `post_form`.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> anyhow::Result<String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

/// A local URL nothing is listening on.
pub async fn dead_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/gone.pdf", addr))
}
