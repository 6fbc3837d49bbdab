use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Level, Member, CreateMemberRequest, UpdateMemberRequest},
    error::Result,
    repository::{parse_uuid, not_found, MemberRepository},
};

// Member joined with its level; the level columns are NULL when unassigned
#[derive(FromRow)]
struct MemberRow {
    id: String,
    username: String,
    level: Option<String>,
    created_at: NaiveDateTime,
    level_row_id: Option<String>,
    level_name: Option<String>,
    level_color: Option<String>,
    level_border_color: Option<String>,
    level_icon: Option<String>,
    level_position: Option<i64>,
}

const SELECT_MEMBERS: &str = r#"
    SELECT m.id, m.username, m.level, m.created_at,
           l.id AS level_row_id, l.name AS level_name, l.color AS level_color,
           l.border_color AS level_border_color, l.icon AS level_icon,
           l.position AS level_position
    FROM members m
    LEFT JOIN levels l ON l.id = m.level
"#;

pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_member(row: MemberRow) -> Result<Member> {
        let level = match row.level_row_id {
            Some(level_id) => Some(Level {
                id: parse_uuid(&level_id)?,
                name: row.level_name.unwrap_or_default(),
                color: row.level_color.unwrap_or_default(),
                border_color: row.level_border_color.unwrap_or_default(),
                icon: row.level_icon.unwrap_or_default(),
                position: row.level_position.unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Member {
            id: parse_uuid(&row.id)?,
            username: row.username,
            level_id: row.level.as_deref().map(parse_uuid).transpose()?,
            level,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> Result<Member> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO members (id, username, level, created_at)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&request.username)
        .bind(request.level_id.to_string())
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| not_found("Member"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>> {
        let sql = format!("{} WHERE m.id = ?", SELECT_MEMBERS);
        let row = sqlx::query_as::<_, MemberRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_member).transpose()
    }

    async fn list(&self) -> Result<Vec<Member>> {
        let sql = format!("{} ORDER BY m.created_at ASC", SELECT_MEMBERS);
        let rows = sqlx::query_as::<_, MemberRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(Self::row_to_member)
            .collect()
    }

    async fn update(&self, id: Uuid, update: UpdateMemberRequest) -> Result<Member> {
        let result = sqlx::query("UPDATE members SET username = ?, level = ? WHERE id = ?")
            .bind(&update.username)
            .bind(update.level_id.to_string())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Member"));
        }

        self.find_by_id(id).await?.ok_or_else(|| not_found("Member"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Member"));
        }

        Ok(())
    }
}
