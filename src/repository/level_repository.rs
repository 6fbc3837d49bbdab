use async_trait::async_trait;
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Level, CreateLevelRequest},
    error::Result,
    repository::{parse_uuid, not_found, LevelRepository},
};

#[derive(FromRow)]
struct LevelRow {
    id: String,
    name: String,
    color: String,
    border_color: String,
    icon: String,
    position: i64,
}

pub struct SqliteLevelRepository {
    pool: SqlitePool,
}

impl SqliteLevelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_level(row: LevelRow) -> Result<Level> {
        Ok(Level {
            id: parse_uuid(&row.id)?,
            name: row.name,
            color: row.color,
            border_color: row.border_color,
            icon: row.icon,
            position: row.position,
        })
    }
}

#[async_trait]
impl LevelRepository for SqliteLevelRepository {
    async fn create(&self, request: CreateLevelRequest) -> Result<Level> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO levels (id, name, color, border_color, icon, position)
            VALUES (?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&request.name)
        .bind(&request.color)
        .bind(&request.border_color)
        .bind(&request.icon)
        .bind(request.position)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| not_found("Level"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Level>> {
        let row = sqlx::query_as::<_, LevelRow>(
            "SELECT id, name, color, border_color, icon, position FROM levels WHERE id = ?"
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_level).transpose()
    }

    async fn list(&self) -> Result<Vec<Level>> {
        let rows = sqlx::query_as::<_, LevelRow>(
            "SELECT id, name, color, border_color, icon, position FROM levels ORDER BY position ASC, name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_level)
            .collect()
    }
}
