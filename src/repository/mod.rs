use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::domain::*;
use crate::error::{AppError, Result};

pub mod member_repository;
pub mod level_repository;
pub mod announcement_repository;
pub mod blog_repository;
pub mod project_repository;
pub mod resource_repository;
pub mod profile_repository;

pub use member_repository::SqliteMemberRepository;
pub use level_repository::SqliteLevelRepository;
pub use announcement_repository::SqliteAnnouncementRepository;
pub use blog_repository::SqliteBlogRepository;
pub use project_repository::SqliteProjectRepository;
pub use resource_repository::SqliteResourceRepository;
pub use profile_repository::SqliteProfileRepository;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: CreateMemberRequest) -> Result<Member>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>>;
    /// All members with their level joined in, oldest first.
    async fn list(&self) -> Result<Vec<Member>>;
    async fn update(&self, id: Uuid, update: UpdateMemberRequest) -> Result<Member>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait LevelRepository: Send + Sync {
    async fn create(&self, level: CreateLevelRequest) -> Result<Level>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Level>>;
    async fn list(&self) -> Result<Vec<Level>>;
}

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: CreateAnnouncementRequest) -> Result<Announcement>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>>;
    async fn list(&self) -> Result<Vec<Announcement>>;
    /// Announcements whose scheduled time is at or before `now`, newest first.
    async fn list_published(&self, now: DateTime<Utc>) -> Result<Vec<Announcement>>;
    async fn update(&self, id: Uuid, update: UpdateAnnouncementRequest) -> Result<Announcement>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, blog: CreateBlogRequest) -> Result<Blog>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>>;
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Blog>>;
    async fn list(&self) -> Result<Vec<Blog>>;
    async fn list_published(&self) -> Result<Vec<Blog>>;
    async fn update(&self, id: Uuid, update: UpdateBlogRequest) -> Result<Blog>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: ProjectRequest) -> Result<Project>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>>;
    async fn list(&self) -> Result<Vec<Project>>;
    async fn update(&self, id: Uuid, project: ProjectRequest) -> Result<Project>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create(&self, resource: ResourceRequest) -> Result<Resource>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>>;
    async fn list(&self) -> Result<Vec<Resource>>;
    async fn update(&self, id: Uuid, resource: ResourceRequest) -> Result<Resource>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, user_id: Uuid, username: &str) -> Result<Profile>;
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>>;
}

pub(crate) fn parse_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| AppError::Database(e.to_string()))
}

/// List columns are stored as JSON arrays in TEXT.
pub(crate) fn encode_list(items: &[String]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| AppError::Internal(e.to_string()))
}

pub(crate) fn decode_list(raw: Option<&str>) -> Result<Vec<String>> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s)
            .map_err(|e| AppError::Database(format!("Invalid list column: {}", e))),
    }
}

/// Error returned when an update or delete matches no row.
pub(crate) fn not_found(entity: &str) -> AppError {
    AppError::NotFound(format!("{} not found", entity))
}
