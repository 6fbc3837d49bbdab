use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{Project, ProjectRequest},
    web::{
        forms::{comma_list, optional, parse_id},
        templates::{FlashMessage, HtmlTemplate, UserInfo},
    },
};

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub user: UserInfo,
    pub message: Option<FlashMessage>,
    pub projects: Vec<AdminProjectInfo>,
    /// Values for the create form; kept after a rejected submission.
    pub form: ProjectForm,
    pub load_error: Option<String>,
}

pub struct AdminProjectInfo {
    pub id: String,
    pub name: String,
    pub short_detail: String,
    pub image_url: String,
    pub github_url: String,
    pub live_demo: String,
    pub technologies: String,
}

impl From<Project> for AdminProjectInfo {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            short_detail: p.short_detail,
            image_url: p.image_url,
            github_url: p.github_url,
            live_demo: p.live_demo.unwrap_or_default(),
            technologies: p.technologies.join(", "),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_detail: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub live_demo: String,
    #[serde(default)]
    pub technologies: String,
}

impl ProjectForm {
    fn to_request(&self) -> Result<ProjectRequest, FlashMessage> {
        let technologies = comma_list(&self.technologies);
        let required = [&self.name, &self.short_detail, &self.image_url, &self.github_url];

        if required.iter().any(|f| f.trim().is_empty()) || technologies.is_empty() {
            return Err(FlashMessage::error(
                "Name, details, image URL, GitHub URL and technologies are required",
            ));
        }

        Ok(ProjectRequest {
            name: self.name.trim().to_string(),
            short_detail: self.short_detail.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            github_url: self.github_url.trim().to_string(),
            live_demo: optional(&self.live_demo),
            technologies,
        })
    }
}

async fn render_projects(
    state: &AppState,
    current_user: &CurrentUser,
    message: Option<FlashMessage>,
    form: ProjectForm,
) -> Response {
    let (projects, load_error) = match state.service_context.project_repo.list().await {
        Ok(projects) => (projects.into_iter().map(AdminProjectInfo::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            (Vec::new(), Some(format!("Error loading projects: {}", e)))
        }
    };

    HtmlTemplate(AdminProjectsTemplate {
        user: super::user_info(current_user),
        message,
        projects,
        form,
        load_error,
    }).into_response()
}

pub async fn admin_projects_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    render_projects(&state, &current_user, None, ProjectForm::default()).await
}

pub async fn admin_create_project(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<ProjectForm>,
) -> impl IntoResponse {
    let (message, form) = match form.to_request() {
        Err(message) => (message, form),
        Ok(request) => match state.service_context.project_repo.create(request).await {
            Ok(_) => (FlashMessage::success("Project added successfully!"), ProjectForm::default()),
            Err(e) => (FlashMessage::error(format!("Error adding project: {}", e)), form),
        },
    };

    render_projects(&state, &current_user, Some(message), form).await
}

pub async fn admin_update_project(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(project_id): Path<String>,
    Form(form): Form<ProjectForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&project_id) else {
        return render_projects(&state, &current_user, Some(FlashMessage::error("Invalid project ID")), ProjectForm::default()).await;
    };

    let message = match form.to_request() {
        Err(message) => message,
        Ok(request) => match state.service_context.project_repo.update(id, request).await {
            Ok(_) => FlashMessage::success("Project updated successfully!"),
            Err(e) => FlashMessage::error(format!("Error updating project: {}", e)),
        },
    };

    render_projects(&state, &current_user, Some(message), ProjectForm::default()).await
}

pub async fn admin_delete_project(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&project_id) else {
        return render_projects(&state, &current_user, Some(FlashMessage::error("Invalid project ID")), ProjectForm::default()).await;
    };

    let message = match state.service_context.project_repo.delete(id).await {
        Ok(()) => FlashMessage::success("Project deleted successfully!"),
        Err(e) => FlashMessage::error(format!("Error deleting project: {}", e)),
    };

    render_projects(&state, &current_user, Some(message), ProjectForm::default()).await
}
