use async_trait::async_trait;
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Project, ProjectRequest},
    error::Result,
    repository::{decode_list, encode_list, parse_uuid, not_found, ProjectRepository},
};

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    short_detail: String,
    image_url: String,
    github_url: String,
    live_demo: Option<String>,
    technologies: String,
}

pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_project(row: ProjectRow) -> Result<Project> {
        Ok(Project {
            id: parse_uuid(&row.id)?,
            name: row.name,
            short_detail: row.short_detail,
            image_url: row.image_url,
            github_url: row.github_url,
            live_demo: row.live_demo,
            technologies: decode_list(Some(&row.technologies))?,
        })
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn create(&self, project: ProjectRequest) -> Result<Project> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO projects (id, name, short_detail, image_url, github_url, live_demo, technologies)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&project.name)
        .bind(&project.short_detail)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_demo)
        .bind(encode_list(&project.technologies)?)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| not_found("Project"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, short_detail, image_url, github_url, live_demo, technologies
            FROM projects
            WHERE id = ?
            "#
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_project).transpose()
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, short_detail, image_url, github_url, live_demo, technologies
            FROM projects
            ORDER BY name ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_project)
            .collect()
    }

    async fn update(&self, id: Uuid, project: ProjectRequest) -> Result<Project> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = ?, short_detail = ?, image_url = ?, github_url = ?,
                live_demo = ?, technologies = ?
            WHERE id = ?
            "#
        )
        .bind(&project.name)
        .bind(&project.short_detail)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_demo)
        .bind(encode_list(&project.technologies)?)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Project"));
        }

        self.find_by_id(id).await?.ok_or_else(|| not_found("Project"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Project"));
        }

        Ok(())
    }
}
