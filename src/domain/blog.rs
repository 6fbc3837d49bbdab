use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub blog_type: BlogType,
    pub content_url: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub slug: String,
    pub published: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlogType {
    /// Article whose content URL points at a markdown document.
    Markdown,
    Pdf,
}

impl BlogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogType::Markdown => "markdown",
            BlogType::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogType::Markdown => "Article",
            BlogType::Pdf => "PDF",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "markdown" => Some(BlogType::Markdown),
            "pdf" => Some(BlogType::Pdf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub description: String,
    pub blog_type: BlogType,
    pub content_url: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: String,
    pub description: String,
    pub blog_type: BlogType,
    pub content_url: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

/// URL slug for a post title: lowercase ASCII, runs of anything else
/// collapsed to a single `-`, no leading or trailing dash.
pub fn generate_slug(title: &str) -> String {
    slug::slugify(title)
}
