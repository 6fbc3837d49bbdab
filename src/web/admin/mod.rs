mod announcements;
mod blogs;
mod dashboard;
mod members;
mod projects;
mod resources;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};
use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    web::templates::UserInfo,
};

pub fn create_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::admin_dashboard_page))

        .route("/members", get(members::admin_members_page).post(members::admin_create_member))
        .route("/members/:id/update", post(members::admin_update_member))
        .route("/members/:id/delete", post(members::admin_delete_member))

        .route("/projects", get(projects::admin_projects_page).post(projects::admin_create_project))
        .route("/projects/:id/update", post(projects::admin_update_project))
        .route("/projects/:id/delete", post(projects::admin_delete_project))

        .route("/resources", get(resources::admin_resources_page).post(resources::admin_create_resource))
        .route("/resources/:id/update", post(resources::admin_update_resource))
        .route("/resources/:id/delete", post(resources::admin_delete_resource))

        .route("/blogs", get(blogs::admin_blogs_page).post(blogs::admin_create_blog))
        .route("/blogs/:id/update", post(blogs::admin_update_blog))
        .route("/blogs/:id/delete", post(blogs::admin_delete_blog))

        .route("/announcements", get(announcements::admin_announcements_page).post(announcements::admin_create_announcement))
        .route("/announcements/:id/update", post(announcements::admin_update_announcement))
        .route("/announcements/:id/delete", post(announcements::admin_delete_announcement))

        .route_layer(middleware::from_fn_with_state(
            state,
            crate::api::middleware::auth::require_admin,
        ))
}

fn user_info(current_user: &CurrentUser) -> UserInfo {
    UserInfo {
        username: current_user.username.clone(),
    }
}
