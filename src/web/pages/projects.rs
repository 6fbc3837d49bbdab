use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::Project,
    web::{pages::fetch_error, revalidate, templates::HtmlTemplate},
};

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub q: Option<String>,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub projects: Vec<Project>,
    pub search_query: String,
    pub error: Option<String>,
}

pub async fn projects_page(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> impl IntoResponse {
    let search_query = query.q.unwrap_or_default().trim().to_string();

    let (projects, error) = match state.service_context.project_repo.list().await {
        Ok(projects) => (filter_projects(projects, &search_query), None),
        Err(e) => {
            tracing::error!("Failed to fetch projects: {}", e);
            (Vec::new(), Some(fetch_error("projects")))
        }
    };

    (
        revalidate(0),
        HtmlTemplate(ProjectsTemplate {
            projects,
            search_query,
            error,
        }),
    )
}

fn filter_projects(projects: Vec<Project>, needle: &str) -> Vec<Project> {
    if needle.is_empty() {
        return projects;
    }
    projects.into_iter().filter(|p| p.matches(needle)).collect()
}
