use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member tier. Rendering metadata (colors, icon) lives on the row so the
/// about page needs no hardcoded table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub border_color: String,
    pub icon: String,
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
    pub level_id: Option<Uuid>,
    pub level: Option<Level>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub username: String,
    pub level_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub username: String,
    pub level_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLevelRequest {
    pub name: String,
    pub color: String,
    pub border_color: String,
    pub icon: String,
    pub position: i64,
}
