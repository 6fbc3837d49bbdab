use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub short_detail: String,
    pub image_url: String,
    pub github_url: String,
    pub live_demo: Option<String>,
    pub technologies: Vec<String>,
}

impl Project {
    /// Case-insensitive substring match against name and short detail.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.short_detail.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    pub short_detail: String,
    pub image_url: String,
    pub github_url: String,
    pub live_demo: Option<String>,
    pub technologies: Vec<String>,
}
