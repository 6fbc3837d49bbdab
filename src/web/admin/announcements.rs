use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    web::{
        forms::{format_datetime_local, optional, parse_datetime_local, parse_id},
        templates::{FlashMessage, HtmlTemplate, UserInfo},
    },
};

#[derive(Template)]
#[template(path = "admin/announcements.html")]
pub struct AdminAnnouncementsTemplate {
    pub user: UserInfo,
    pub message: Option<FlashMessage>,
    pub announcements: Vec<AdminAnnouncementInfo>,
    pub form: AnnouncementForm,
    pub load_error: Option<String>,
}

pub struct AdminAnnouncementInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_by: String,
    /// `datetime-local` value for the edit form.
    pub scheduled_input: String,
    pub scheduled_display: String,
    pub is_live: bool,
}

impl From<Announcement> for AdminAnnouncementInfo {
    fn from(a: Announcement) -> Self {
        let scheduled = a.scheduled_at.unwrap_or(a.created_at);
        Self {
            id: a.id.to_string(),
            title: a.title,
            description: a.description,
            image_url: a.image_url.unwrap_or_default(),
            created_by: a.created_by,
            scheduled_input: format_datetime_local(&scheduled),
            scheduled_display: scheduled.format("%b %d, %Y %H:%M UTC").to_string(),
            is_live: scheduled <= Utc::now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnouncementForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub scheduled_at: String,
}

impl AnnouncementForm {
    fn to_update(&self) -> Result<UpdateAnnouncementRequest, FlashMessage> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(FlashMessage::error("Title and description are required"));
        }

        let scheduled_at = if self.scheduled_at.trim().is_empty() {
            Utc::now()
        } else {
            parse_datetime_local(&self.scheduled_at)
                .ok_or_else(|| FlashMessage::error("Please enter a valid schedule date and time"))?
        };

        Ok(UpdateAnnouncementRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: optional(&self.image_url),
            scheduled_at,
        })
    }
}

async fn render_announcements(
    state: &AppState,
    current_user: &CurrentUser,
    message: Option<FlashMessage>,
    form: AnnouncementForm,
) -> Response {
    let (announcements, load_error) = match state.service_context.announcement_repo.list().await {
        Ok(list) => (list.into_iter().map(AdminAnnouncementInfo::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to load announcements: {}", e);
            (Vec::new(), Some(format!("Error loading announcements: {}", e)))
        }
    };

    HtmlTemplate(AdminAnnouncementsTemplate {
        user: super::user_info(current_user),
        message,
        announcements,
        form,
        load_error,
    }).into_response()
}

pub async fn admin_announcements_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    render_announcements(&state, &current_user, None, AnnouncementForm::default()).await
}

pub async fn admin_create_announcement(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<AnnouncementForm>,
) -> impl IntoResponse {
    let (message, form) = match form.to_update() {
        Err(message) => (message, form),
        Ok(fields) => {
            let request = CreateAnnouncementRequest {
                title: fields.title,
                description: fields.description,
                image_url: fields.image_url,
                created_by: current_user.username.clone(),
                scheduled_at: fields.scheduled_at,
            };

            match state.service_context.announcement_repo.create(request).await {
                Ok(_) => (
                    FlashMessage::success("Announcement posted successfully!"),
                    AnnouncementForm::default(),
                ),
                Err(e) => (FlashMessage::error(format!("Error posting announcement: {}", e)), form),
            }
        }
    };

    render_announcements(&state, &current_user, Some(message), form).await
}

pub async fn admin_update_announcement(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(announcement_id): Path<String>,
    Form(form): Form<AnnouncementForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&announcement_id) else {
        return render_announcements(&state, &current_user, Some(FlashMessage::error("Invalid announcement ID")), AnnouncementForm::default()).await;
    };

    let message = match form.to_update() {
        Err(message) => message,
        Ok(update) => match state.service_context.announcement_repo.update(id, update).await {
            Ok(_) => FlashMessage::success("Announcement updated successfully!"),
            Err(e) => FlashMessage::error(format!("Error updating announcement: {}", e)),
        },
    };

    render_announcements(&state, &current_user, Some(message), AnnouncementForm::default()).await
}

pub async fn admin_delete_announcement(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(announcement_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&announcement_id) else {
        return render_announcements(&state, &current_user, Some(FlashMessage::error("Invalid announcement ID")), AnnouncementForm::default()).await;
    };

    let message = match state.service_context.announcement_repo.delete(id).await {
        Ok(()) => FlashMessage::success("Announcement deleted successfully!"),
        Err(e) => FlashMessage::error(format!("Error deleting announcement: {}", e)),
    };

    render_announcements(&state, &current_user, Some(message), AnnouncementForm::default()).await
}
