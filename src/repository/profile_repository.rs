use async_trait::async_trait;
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::Profile,
    error::Result,
    repository::{parse_uuid, ProfileRepository},
};

#[derive(FromRow)]
struct ProfileRow {
    id: String,
    username: String,
}

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn create(&self, user_id: Uuid, username: &str) -> Result<Profile> {
        sqlx::query("INSERT INTO profiles (id, username) VALUES (?, ?)")
            .bind(user_id.to_string())
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(Profile {
            id: user_id,
            username: username.to_string(),
        })
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT id, username FROM profiles WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(Profile {
                id: parse_uuid(&r.id)?,
                username: r.username,
            })),
            None => Ok(None),
        }
    }
}
