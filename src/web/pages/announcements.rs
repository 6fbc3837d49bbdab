use askama::Template;
use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::{
    api::state::AppState,
    domain::Announcement,
    web::{pages::fetch_error, revalidate, templates::HtmlTemplate},
};

pub struct AnnouncementCard {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub posted_by: String,
    pub posted_at: String,
}

impl From<Announcement> for AnnouncementCard {
    fn from(a: Announcement) -> Self {
        let when = a.scheduled_at.unwrap_or(a.created_at);
        Self {
            title: a.title,
            description: a.description,
            image_url: a.image_url,
            posted_by: a.created_by,
            posted_at: when.format("%b %d, %Y %H:%M UTC").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "announcements.html")]
pub struct AnnouncementsTemplate {
    pub announcements: Vec<AnnouncementCard>,
    pub error: Option<String>,
}

pub async fn announcements_page(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.service_context.announcement_repo
        .list_published(Utc::now())
        .await;

    let (announcements, error) = match result {
        Ok(list) => (list.into_iter().map(AnnouncementCard::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to fetch announcements: {}", e);
            (Vec::new(), Some(fetch_error("announcements")))
        }
    };

    (revalidate(0), HtmlTemplate(AnnouncementsTemplate { announcements, error }))
}
