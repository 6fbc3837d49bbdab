use askama::Template;
use axum::{response::IntoResponse, Extension};

use crate::{
    api::middleware::auth::CurrentUser,
    web::templates::{HtmlTemplate, UserInfo},
};

pub struct PanelLink {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const PANELS: &[PanelLink] = &[
    PanelLink { href: "/admin/members", title: "Members", description: "Add members and assign their level" },
    PanelLink { href: "/admin/projects", title: "Projects", description: "Showcase club projects" },
    PanelLink { href: "/admin/resources", title: "Resources", description: "Curate learning links" },
    PanelLink { href: "/admin/blogs", title: "Blogs", description: "Publish articles and PDF writeups" },
    PanelLink { href: "/admin/announcements", title: "Announcements", description: "Post and schedule announcements" },
];

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub user: UserInfo,
    pub panels: &'static [PanelLink],
}

pub async fn admin_dashboard_page(
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    HtmlTemplate(AdminDashboardTemplate {
        user: super::user_info(&current_user),
        panels: PANELS,
    })
}
