use std::sync::Arc;
use sqlx::SqlitePool;
use crate::repository::*;
use crate::auth::AuthService;

/// Everything a handler needs to reach the store and the outside world.
pub struct ServiceContext {
    pub member_repo: Arc<dyn MemberRepository>,
    pub level_repo: Arc<dyn LevelRepository>,
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub blog_repo: Arc<dyn BlogRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub resource_repo: Arc<dyn ResourceRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub auth_service: Arc<AuthService>,
    /// Shared client for the PDF relay and markdown fetches.
    pub http_client: reqwest::Client,
}

impl ServiceContext {
    pub fn new(
        db_pool: SqlitePool,
        auth_service: Arc<AuthService>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            member_repo: Arc::new(SqliteMemberRepository::new(db_pool.clone())),
            level_repo: Arc::new(SqliteLevelRepository::new(db_pool.clone())),
            announcement_repo: Arc::new(SqliteAnnouncementRepository::new(db_pool.clone())),
            blog_repo: Arc::new(SqliteBlogRepository::new(db_pool.clone())),
            project_repo: Arc::new(SqliteProjectRepository::new(db_pool.clone())),
            resource_repo: Arc::new(SqliteResourceRepository::new(db_pool.clone())),
            profile_repo: Arc::new(SqliteProfileRepository::new(db_pool)),
            auth_service,
            http_client,
        }
    }
}
