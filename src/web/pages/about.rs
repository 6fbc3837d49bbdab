use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    api::state::AppState,
    domain::Member,
    web::{pages::fetch_error, revalidate, templates::HtmlTemplate},
};

pub struct LevelGroup {
    pub name: String,
    pub color: String,
    pub border_color: String,
    pub icon: String,
    pub position: i64,
    pub members: Vec<String>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub groups: Vec<LevelGroup>,
    pub error: Option<String>,
}

pub async fn about_page(State(state): State<AppState>) -> impl IntoResponse {
    let (groups, error) = match state.service_context.member_repo.list().await {
        Ok(members) => (group_by_level(members), None),
        Err(e) => {
            tracing::error!("Failed to fetch members: {}", e);
            (Vec::new(), Some(fetch_error("members")))
        }
    };

    (revalidate(0), HtmlTemplate(AboutTemplate { groups, error }))
}

/// Buckets members under their level, ordered by level position. Members
/// keep their join order inside a bucket; members without a level go last.
pub fn group_by_level(members: Vec<Member>) -> Vec<LevelGroup> {
    let mut groups: Vec<LevelGroup> = Vec::new();

    for member in members {
        let (name, color, border_color, icon, position) = match member.level {
            Some(level) => (level.name, level.color, level.border_color, level.icon, level.position),
            None => ("Unassigned".to_string(), "slate".to_string(), "slate".to_string(), "user".to_string(), i64::MAX),
        };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.members.push(member.username),
            None => groups.push(LevelGroup {
                name,
                color,
                border_color,
                icon,
                position,
                members: vec![member.username],
            }),
        }
    }

    groups.sort_by_key(|g| g.position);
    groups
}
