pub mod about;
pub mod announcements;
pub mod blog;
pub mod home;
pub mod projects;
pub mod resources;

use axum::response::Response;

use crate::web::templates::not_found_page;

pub async fn not_found() -> Response {
    not_found_page()
}

/// Message shown in place of a listing when its query fails.
pub(crate) fn fetch_error(what: &str) -> String {
    format!("Could not fetch {}. Please try again later.", what)
}
