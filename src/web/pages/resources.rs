use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    api::state::AppState,
    domain::Resource,
    web::{pages::fetch_error, revalidate, templates::HtmlTemplate},
};

pub struct ResourceGroup {
    pub category: String,
    /// Fragment id used by the category jump links.
    pub anchor: String,
    pub resources: Vec<Resource>,
}

#[derive(Template)]
#[template(path = "resources.html")]
pub struct ResourcesTemplate {
    pub groups: Vec<ResourceGroup>,
    pub error: Option<String>,
}

pub async fn resources_page(State(state): State<AppState>) -> impl IntoResponse {
    let (groups, error) = match state.service_context.resource_repo.list().await {
        Ok(resources) => (group_by_category(resources), None),
        Err(e) => {
            tracing::error!("Failed to fetch resources: {}", e);
            (Vec::new(), Some(fetch_error("resources")))
        }
    };

    (revalidate(0), HtmlTemplate(ResourcesTemplate { groups, error }))
}

/// Groups in order of first appearance, so the oldest category leads.
pub fn group_by_category(resources: Vec<Resource>) -> Vec<ResourceGroup> {
    let mut groups: Vec<ResourceGroup> = Vec::new();

    for resource in resources {
        let category = resource.category.as_str();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.resources.push(resource),
            None => groups.push(ResourceGroup {
                category: category.to_string(),
                anchor: slug::slugify(category),
                resources: vec![resource],
            }),
        }
    }

    groups
}
