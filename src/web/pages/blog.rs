use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    api::state::AppState,
    domain::{Blog, BlogType},
    web::{
        markdown::fetch_markdown_html,
        pages::fetch_error,
        revalidate,
        templates::{not_found_page, HtmlTemplate},
        BLOG_LIST_REVALIDATE_SECS,
    },
};

pub struct BlogCard {
    pub title: String,
    pub description: String,
    pub href: String,
    pub type_label: &'static str,
    pub is_pdf: bool,
    pub byline: Option<String>,
    pub tags: Vec<String>,
    pub published_on: String,
}

impl From<&Blog> for BlogCard {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            description: blog.description.clone(),
            href: blog_href(blog),
            type_label: blog.blog_type.label(),
            is_pdf: blog.blog_type == BlogType::Pdf,
            byline: byline(blog),
            tags: blog.tags.clone(),
            published_on: blog.created_at.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Posts whose title slugged to nothing are linked by id.
fn blog_href(blog: &Blog) -> String {
    if blog.slug.is_empty() {
        format!("/blog/{}", blog.id)
    } else {
        format!("/blog/{}", blog.slug)
    }
}

fn byline(blog: &Blog) -> Option<String> {
    blog.author
        .clone()
        .or_else(|| blog.created_by.as_ref().map(|u| format!("@{}", u)))
}

#[derive(Template)]
#[template(path = "blog/list.html")]
pub struct BlogListTemplate {
    pub blogs: Vec<BlogCard>,
    pub error: Option<String>,
}

pub async fn blog_list_page(State(state): State<AppState>) -> impl IntoResponse {
    let (blogs, error) = match state.service_context.blog_repo.list_published().await {
        Ok(blogs) => (blogs.iter().map(BlogCard::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to fetch blogs: {}", e);
            (Vec::new(), Some(fetch_error("blogs")))
        }
    };

    (
        revalidate(BLOG_LIST_REVALIDATE_SECS),
        HtmlTemplate(BlogListTemplate { blogs, error }),
    )
}

pub enum BlogBody {
    /// Sanitized HTML, or `None` when the document could not be loaded.
    Article(Option<String>),
    Pdf { viewer_src: String, url: String },
}

#[derive(Template)]
#[template(path = "blog/detail.html")]
pub struct BlogDetailTemplate {
    pub blog: BlogCard,
    pub body: BlogBody,
}

pub async fn blog_detail_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let blog = match state.service_context.blog_repo.find_published_by_slug(&slug).await {
        Ok(Some(blog)) => blog,
        Ok(None) => return not_found_page(),
        Err(e) => {
            tracing::error!("Failed to fetch blog {}: {}", slug, e);
            return not_found_page();
        }
    };

    let body = match blog.blog_type {
        BlogType::Markdown => {
            match fetch_markdown_html(&state.service_context.http_client, &blog.content_url).await {
                Ok(html) => BlogBody::Article(Some(html)),
                Err(e) => {
                    tracing::error!("Failed to load content for blog {}: {}", blog.id, e);
                    BlogBody::Article(None)
                }
            }
        }
        BlogType::Pdf => BlogBody::Pdf {
            viewer_src: pdf_viewer_src(&blog.content_url),
            url: blog.content_url.clone(),
        },
    };

    (
        revalidate(0),
        HtmlTemplate(BlogDetailTemplate {
            blog: BlogCard::from(&blog),
            body,
        }),
    ).into_response()
}

/// Relay URL that serves `content_url` with inline PDF headers.
pub fn pdf_viewer_src(content_url: &str) -> String {
    format!("/api/pdf-proxy?url={}", urlencoding::encode(content_url))
}
