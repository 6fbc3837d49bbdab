use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Resource, ResourceCategory, ResourceRequest},
    error::{AppError, Result},
    repository::{parse_uuid, not_found, ResourceRepository},
};

#[derive(FromRow)]
struct ResourceRow {
    id: String,
    heading: String,
    description: String,
    category: String,
    link: String,
    created_at: NaiveDateTime,
}

pub struct SqliteResourceRepository {
    pool: SqlitePool,
}

impl SqliteResourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_resource(row: ResourceRow) -> Result<Resource> {
        Ok(Resource {
            id: parse_uuid(&row.id)?,
            heading: row.heading,
            description: row.description,
            category: ResourceCategory::parse(&row.category)
                .ok_or_else(|| AppError::Database(format!("Invalid resource category: {}", row.category)))?,
            link: row.link,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl ResourceRepository for SqliteResourceRepository {
    async fn create(&self, resource: ResourceRequest) -> Result<Resource> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO resources (id, heading, description, category, link, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&resource.heading)
        .bind(&resource.description)
        .bind(resource.category.as_str())
        .bind(&resource.link)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| not_found("Resource"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>> {
        let row = sqlx::query_as::<_, ResourceRow>(
            "SELECT id, heading, description, category, link, created_at FROM resources WHERE id = ?"
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_resource).transpose()
    }

    async fn list(&self) -> Result<Vec<Resource>> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            "SELECT id, heading, description, category, link, created_at FROM resources ORDER BY created_at ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_resource)
            .collect()
    }

    async fn update(&self, id: Uuid, resource: ResourceRequest) -> Result<Resource> {
        let result = sqlx::query(
            "UPDATE resources SET heading = ?, description = ?, category = ?, link = ? WHERE id = ?"
        )
        .bind(&resource.heading)
        .bind(&resource.description)
        .bind(resource.category.as_str())
        .bind(&resource.link)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Resource"));
        }

        self.find_by_id(id).await?.ok_or_else(|| not_found("Resource"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Resource"));
        }

        Ok(())
    }
}
