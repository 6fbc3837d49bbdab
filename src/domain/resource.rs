use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub heading: String,
    pub description: String,
    pub category: ResourceCategory,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceCategory {
    CTF,
    Wargame,
    Guide,
    Other,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::CTF,
        ResourceCategory::Wargame,
        ResourceCategory::Guide,
        ResourceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::CTF => "CTF",
            ResourceCategory::Wargame => "Wargame",
            ResourceCategory::Guide => "Guide",
            ResourceCategory::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub heading: String,
    pub description: String,
    pub category: ResourceCategory,
    pub link: String,
}
