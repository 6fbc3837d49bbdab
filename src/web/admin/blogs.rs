use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{Blog, BlogType, CreateBlogRequest, UpdateBlogRequest},
    web::{
        forms::{comma_list, is_valid_url, optional, parse_id},
        templates::{FlashMessage, HtmlTemplate, UserInfo},
    },
};

#[derive(Template)]
#[template(path = "admin/blogs.html")]
pub struct AdminBlogsTemplate {
    pub user: UserInfo,
    pub message: Option<FlashMessage>,
    pub blogs: Vec<AdminBlogInfo>,
    pub form: BlogForm,
    pub load_error: Option<String>,
}

pub struct AdminBlogInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub blog_type: &'static str,
    pub type_label: &'static str,
    pub content_url: String,
    pub author: String,
    pub tags: String,
    pub slug: String,
    pub published: bool,
    pub created_at: String,
}

impl From<Blog> for AdminBlogInfo {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id.to_string(),
            title: b.title,
            description: b.description,
            blog_type: b.blog_type.as_str(),
            type_label: b.blog_type.label(),
            content_url: b.content_url,
            author: b.author.unwrap_or_default(),
            tags: b.tags.join(", "),
            slug: b.slug,
            published: b.published,
            created_at: b.created_at.format("%b %d, %Y").to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blog_type: String,
    #[serde(default)]
    pub content_url: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: String,
    /// Checkbox; absent when unticked.
    pub published: Option<String>,
}

impl BlogForm {
    /// Fresh create form: published markdown post credited to `author`.
    pub fn blank(author: &str) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            blog_type: BlogType::Markdown.as_str().to_string(),
            content_url: String::new(),
            author: author.to_string(),
            tags: String::new(),
            published: Some("on".to_string()),
        }
    }

    fn to_update(&self) -> Result<UpdateBlogRequest, FlashMessage> {
        if [&self.title, &self.description, &self.content_url].iter().any(|f| f.trim().is_empty()) {
            return Err(FlashMessage::error("Title, description, and content URL are required"));
        }

        if !is_valid_url(&self.content_url) {
            return Err(FlashMessage::error("Please enter a valid URL for the content"));
        }

        let blog_type = match self.blog_type.trim() {
            "" => BlogType::Markdown,
            other => BlogType::parse(other)
                .ok_or_else(|| FlashMessage::error("Please choose a valid blog type"))?,
        };

        Ok(UpdateBlogRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            blog_type,
            content_url: self.content_url.trim().to_string(),
            author: optional(&self.author),
            tags: comma_list(&self.tags),
            published: self.published.is_some(),
        })
    }
}

async fn render_blogs(
    state: &AppState,
    current_user: &CurrentUser,
    message: Option<FlashMessage>,
    form: BlogForm,
) -> Response {
    let (blogs, load_error) = match state.service_context.blog_repo.list().await {
        Ok(blogs) => (blogs.into_iter().map(AdminBlogInfo::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to load blogs: {}", e);
            (Vec::new(), Some(format!("Error loading blogs: {}", e)))
        }
    };

    HtmlTemplate(AdminBlogsTemplate {
        user: super::user_info(current_user),
        message,
        blogs,
        form,
        load_error,
    }).into_response()
}

pub async fn admin_blogs_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    render_blogs(&state, &current_user, None, BlogForm::blank(&current_user.username)).await
}

pub async fn admin_create_blog(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Form(form): Form<BlogForm>,
) -> impl IntoResponse {
    let (message, form) = match form.to_update() {
        Err(message) => (message, form),
        Ok(fields) => {
            let request = CreateBlogRequest {
                title: fields.title,
                description: fields.description,
                blog_type: fields.blog_type,
                content_url: fields.content_url,
                author: fields.author,
                tags: fields.tags,
                published: fields.published,
                created_by: current_user.username.clone(),
            };

            match state.service_context.blog_repo.create(request).await {
                Ok(blog) => {
                    tracing::info!("{} created blog {}", current_user.username, blog.slug);
                    (
                        FlashMessage::success("Blog post created successfully!"),
                        BlogForm::blank(&current_user.username),
                    )
                }
                Err(e) => (FlashMessage::error(format!("Error creating blog post: {}", e)), form),
            }
        }
    };

    render_blogs(&state, &current_user, Some(message), form).await
}

pub async fn admin_update_blog(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(blog_id): Path<String>,
    Form(form): Form<BlogForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&blog_id) else {
        return render_blogs(&state, &current_user, Some(FlashMessage::error("Invalid blog ID")), BlogForm::blank(&current_user.username)).await;
    };

    let message = match form.to_update() {
        Err(message) => message,
        Ok(update) => match state.service_context.blog_repo.update(id, update).await {
            Ok(_) => FlashMessage::success("Blog post updated successfully!"),
            Err(e) => FlashMessage::error(format!("Error updating blog post: {}", e)),
        },
    };

    render_blogs(&state, &current_user, Some(message), BlogForm::blank(&current_user.username)).await
}

pub async fn admin_delete_blog(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(blog_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&blog_id) else {
        return render_blogs(&state, &current_user, Some(FlashMessage::error("Invalid blog ID")), BlogForm::blank(&current_user.username)).await;
    };

    let message = match state.service_context.blog_repo.delete(id).await {
        Ok(()) => FlashMessage::success("Blog post deleted successfully!"),
        Err(e) => FlashMessage::error(format!("Error deleting blog post: {}", e)),
    };

    render_blogs(&state, &current_user, Some(message), BlogForm::blank(&current_user.username)).await
}
