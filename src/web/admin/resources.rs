use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{ResourceCategory, ResourceRequest},
    web::{
        forms::parse_id,
        templates::{FlashMessage, HtmlTemplate, UserInfo},
    },
};

#[derive(Template)]
#[template(path = "admin/resources.html")]
pub struct AdminResourcesTemplate {
    pub user: UserInfo,
    pub message: Option<FlashMessage>,
    pub resources: Vec<AdminResourceInfo>,
    pub categories: Vec<CategoryOption>,
    pub form: ResourceForm,
    pub load_error: Option<String>,
}

pub struct AdminResourceInfo {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub category: &'static str,
    pub link: String,
}

pub struct CategoryOption {
    pub name: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceForm {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub link: String,
}

impl ResourceForm {
    fn to_request(&self) -> Result<ResourceRequest, FlashMessage> {
        if [&self.heading, &self.description, &self.link].iter().any(|f| f.trim().is_empty()) {
            return Err(FlashMessage::error("Heading, description, category and link are required"));
        }

        let category = ResourceCategory::parse(self.category.trim())
            .ok_or_else(|| FlashMessage::error("Please choose a valid category"))?;

        Ok(ResourceRequest {
            heading: self.heading.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            link: self.link.trim().to_string(),
        })
    }
}

async fn render_resources(
    state: &AppState,
    current_user: &CurrentUser,
    message: Option<FlashMessage>,
    form: ResourceForm,
) -> Response {
    let (resources, load_error) = match state.service_context.resource_repo.list().await {
        Ok(resources) => (
            resources
                .into_iter()
                .map(|r| AdminResourceInfo {
                    id: r.id.to_string(),
                    heading: r.heading,
                    description: r.description,
                    category: r.category.as_str(),
                    link: r.link,
                })
                .collect(),
            None,
        ),
        Err(e) => {
            tracing::error!("Failed to load resources: {}", e);
            (Vec::new(), Some(format!("Error loading resources: {}", e)))
        }
    };

    HtmlTemplate(AdminResourcesTemplate {
        user: super::user_info(current_user),
        message,
        resources,
        categories: ResourceCategory::ALL
            .iter()
            .map(|c| CategoryOption { name: c.as_str() })
            .collect(),
        form,
        load_error,
    }).into_response()
}

pub async fn admin_resources_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    render_resources(&state, &current_user, None, ResourceForm::default()).await
}

pub async fn admin_create_resource(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<ResourceForm>,
) -> impl IntoResponse {
    let (message, form) = match form.to_request() {
        Err(message) => (message, form),
        Ok(request) => match state.service_context.resource_repo.create(request).await {
            Ok(_) => (FlashMessage::success("Resource added successfully!"), ResourceForm::default()),
            Err(e) => (FlashMessage::error(format!("Error adding resource: {}", e)), form),
        },
    };

    render_resources(&state, &current_user, Some(message), form).await
}

pub async fn admin_update_resource(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(resource_id): Path<String>,
    Form(form): Form<ResourceForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&resource_id) else {
        return render_resources(&state, &current_user, Some(FlashMessage::error("Invalid resource ID")), ResourceForm::default()).await;
    };

    let message = match form.to_request() {
        Err(message) => message,
        Ok(request) => match state.service_context.resource_repo.update(id, request).await {
            Ok(_) => FlashMessage::success("Resource updated successfully!"),
            Err(e) => FlashMessage::error(format!("Error updating resource: {}", e)),
        },
    };

    render_resources(&state, &current_user, Some(message), ResourceForm::default()).await
}

pub async fn admin_delete_resource(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(resource_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&resource_id) else {
        return render_resources(&state, &current_user, Some(FlashMessage::error("Invalid resource ID")), ResourceForm::default()).await;
    };

    let message = match state.service_context.resource_repo.delete(id).await {
        Ok(()) => FlashMessage::success("Resource deleted successfully!"),
        Err(e) => FlashMessage::error(format!("Error deleting resource: {}", e)),
    };

    render_resources(&state, &current_user, Some(message), ResourceForm::default()).await
}
