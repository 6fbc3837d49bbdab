pub mod admin;
pub mod forms;
pub mod markdown;
pub mod pages;
pub mod templates;

use axum::{
    Router,
    http::{header, HeaderName},
    routing::{get, post},
};
use crate::api::state::AppState;

/// CDN revalidation window for the blog index.
pub const BLOG_LIST_REVALIDATE_SECS: u32 = 172_800;

pub fn create_web_routes(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(pages::home::home_page))
        .route("/about", get(pages::about::about_page))
        .route("/events", get(pages::home::events_page))
        .route("/join-us", get(pages::home::join_us_page))
        .route("/blog", get(pages::blog::blog_list_page))
        .route("/blog/:slug", get(pages::blog::blog_detail_page))
        .route("/announcements", get(pages::announcements::announcements_page))
        .route("/projects", get(pages::projects::projects_page))
        .route("/resources", get(pages::resources::resources_page))

        // Auth pages
        .route("/login", get(templates::auth::login_page))
        .route("/login", post(templates::auth::login_handler))
        .route("/logout", post(templates::auth::logout_handler))

        // Admin console
        .nest("/admin", admin::create_admin_routes(state.clone()))

        .fallback(pages::not_found)
        .with_state(state)
}

/// `Cache-Control` header telling a CDN how long it may serve a page before
/// revalidating. Browsers always revalidate.
pub fn revalidate(seconds: u32) -> [(HeaderName, String); 1] {
    [(
        header::CACHE_CONTROL,
        format!("public, max-age=0, s-maxage={}", seconds),
    )]
}
