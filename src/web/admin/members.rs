use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{CreateMemberRequest, UpdateMemberRequest},
    web::{
        forms::parse_id,
        templates::{FlashMessage, HtmlTemplate, UserInfo},
    },
};

#[derive(Template)]
#[template(path = "admin/members.html")]
pub struct AdminMembersTemplate {
    pub user: UserInfo,
    pub message: Option<FlashMessage>,
    pub members: Vec<AdminMemberInfo>,
    pub levels: Vec<LevelOption>,
    /// Create form values. An empty `level_id` selects the first level.
    pub form: MemberForm,
    pub load_error: Option<String>,
}

pub struct AdminMemberInfo {
    pub id: String,
    pub username: String,
    pub level_id: String,
    pub level_name: String,
    pub joined_at: String,
}

pub struct LevelOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub level_id: String,
}

async fn render_members(
    state: &AppState,
    current_user: &CurrentUser,
    message: Option<FlashMessage>,
    form: MemberForm,
) -> Response {
    let mut load_error = None;

    let members = match state.service_context.member_repo.list().await {
        Ok(members) => members
            .into_iter()
            .map(|m| AdminMemberInfo {
                id: m.id.to_string(),
                username: m.username,
                level_id: m.level_id.map(|id| id.to_string()).unwrap_or_default(),
                level_name: m.level.map(|l| l.name).unwrap_or_else(|| "N/A".to_string()),
                joined_at: m.created_at.format("%b %d, %Y").to_string(),
            })
            .collect(),
        Err(e) => {
            tracing::error!("Failed to load members: {}", e);
            load_error = Some(format!("Error loading members: {}", e));
            Vec::new()
        }
    };

    let levels = match state.service_context.level_repo.list().await {
        Ok(levels) => levels
            .into_iter()
            .map(|l| LevelOption { id: l.id.to_string(), name: l.name })
            .collect(),
        Err(e) => {
            tracing::error!("Failed to load levels: {}", e);
            if load_error.is_none() {
                load_error = Some(format!("Error loading levels: {}", e));
            }
            Vec::new()
        }
    };

    HtmlTemplate(AdminMembersTemplate {
        user: super::user_info(current_user),
        message,
        members,
        levels,
        form,
        load_error,
    }).into_response()
}

fn validate(form: &MemberForm) -> Result<(String, uuid::Uuid), FlashMessage> {
    let username = form.username.trim();
    match parse_id(&form.level_id) {
        Some(level_id) if !username.is_empty() => Ok((username.to_string(), level_id)),
        _ => Err(FlashMessage::error("Username and level are required")),
    }
}

pub async fn admin_members_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    render_members(&state, &current_user, None, MemberForm::default()).await
}

pub async fn admin_create_member(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<MemberForm>,
) -> impl IntoResponse {
    let (message, form) = match validate(&form) {
        Err(message) => (message, form),
        Ok((username, level_id)) => {
            match state.service_context.member_repo
                .create(CreateMemberRequest { username, level_id })
                .await
            {
                Ok(member) => {
                    tracing::info!("{} added member {}", current_user.username, member.username);
                    (FlashMessage::success("Member added successfully!"), MemberForm::default())
                }
                Err(e) => (FlashMessage::error(format!("Error adding member: {}", e)), form),
            }
        }
    };

    render_members(&state, &current_user, Some(message), form).await
}

pub async fn admin_update_member(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(member_id): Path<String>,
    Form(form): Form<MemberForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&member_id) else {
        return render_members(&state, &current_user, Some(FlashMessage::error("Invalid member ID")), MemberForm::default()).await;
    };

    let message = match validate(&form) {
        Err(message) => message,
        Ok((username, level_id)) => {
            match state.service_context.member_repo
                .update(id, UpdateMemberRequest { username, level_id })
                .await
            {
                Ok(_) => FlashMessage::success("Member updated successfully!"),
                Err(e) => FlashMessage::error(format!("Error updating member: {}", e)),
            }
        }
    };

    render_members(&state, &current_user, Some(message), MemberForm::default()).await
}

pub async fn admin_delete_member(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(member_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&member_id) else {
        return render_members(&state, &current_user, Some(FlashMessage::error("Invalid member ID")), MemberForm::default()).await;
    };

    let message = match state.service_context.member_repo.delete(id).await {
        Ok(()) => FlashMessage::success("Member deleted successfully!"),
        Err(e) => FlashMessage::error(format!("Error deleting member: {}", e)),
    };

    render_members(&state, &current_user, Some(message), MemberForm::default()).await
}
