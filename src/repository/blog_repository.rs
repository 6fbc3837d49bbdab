use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{generate_slug, Blog, BlogType, CreateBlogRequest, UpdateBlogRequest},
    error::{AppError, Result},
    repository::{decode_list, encode_list, parse_uuid, not_found, BlogRepository},
};

#[derive(FromRow)]
struct BlogRow {
    id: String,
    title: String,
    description: String,
    #[sqlx(rename = "type")]
    blog_type: String,
    content_url: String,
    author: Option<String>,
    tags: Option<String>,
    slug: String,
    published: i32,
    created_by: Option<String>,
    created_at: NaiveDateTime,
}

const SELECT_BLOGS: &str = r#"
    SELECT id, title, description, type, content_url, author, tags, slug,
           published, created_by, created_at
    FROM blogs
"#;

pub struct SqliteBlogRepository {
    pool: SqlitePool,
}

impl SqliteBlogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_blog(row: BlogRow) -> Result<Blog> {
        Ok(Blog {
            id: parse_uuid(&row.id)?,
            title: row.title,
            description: row.description,
            blog_type: BlogType::parse(&row.blog_type)
                .ok_or_else(|| AppError::Database(format!("Invalid blog type: {}", row.blog_type)))?,
            content_url: row.content_url,
            author: row.author,
            tags: decode_list(row.tags.as_deref())?,
            slug: row.slug,
            published: row.published != 0,
            created_by: row.created_by,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }

    // Empty tag lists are stored as NULL
    fn tags_column(tags: &[String]) -> Result<Option<String>> {
        if tags.is_empty() {
            Ok(None)
        } else {
            encode_list(tags).map(Some)
        }
    }
}

#[async_trait]
impl BlogRepository for SqliteBlogRepository {
    async fn create(&self, blog: CreateBlogRequest) -> Result<Blog> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();
        let slug = generate_slug(&blog.title);
        let published_int = if blog.published { 1i32 } else { 0i32 };

        sqlx::query(
            r#"
            INSERT INTO blogs (
                id, title, description, type, content_url, author, tags, slug,
                published, created_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(blog.blog_type.as_str())
        .bind(&blog.content_url)
        .bind(&blog.author)
        .bind(Self::tags_column(&blog.tags)?)
        .bind(&slug)
        .bind(published_int)
        .bind(&blog.created_by)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| not_found("Blog"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>> {
        let sql = format!("{} WHERE id = ?", SELECT_BLOGS);
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_blog).transpose()
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Blog>> {
        // Posts without a usable slug are linked by id instead
        let sql = format!(
            "{} WHERE (slug = ? OR id = ?) AND published = 1 ORDER BY created_at DESC LIMIT 1",
            SELECT_BLOGS
        );
        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(slug)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_blog).transpose()
    }

    async fn list(&self) -> Result<Vec<Blog>> {
        let sql = format!("{} ORDER BY created_at DESC", SELECT_BLOGS);
        let rows = sqlx::query_as::<_, BlogRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(Self::row_to_blog)
            .collect()
    }

    async fn list_published(&self) -> Result<Vec<Blog>> {
        let sql = format!("{} WHERE published = 1 ORDER BY created_at DESC", SELECT_BLOGS);
        let rows = sqlx::query_as::<_, BlogRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(Self::row_to_blog)
            .collect()
    }

    async fn update(&self, id: Uuid, update: UpdateBlogRequest) -> Result<Blog> {
        let slug = generate_slug(&update.title);
        let published_int = if update.published { 1i32 } else { 0i32 };

        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = ?, description = ?, type = ?, content_url = ?, author = ?,
                tags = ?, slug = ?, published = ?
            WHERE id = ?
            "#
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.blog_type.as_str())
        .bind(&update.content_url)
        .bind(&update.author)
        .bind(Self::tags_column(&update.tags)?)
        .bind(&slug)
        .bind(published_int)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Blog"));
        }

        self.find_by_id(id).await?.ok_or_else(|| not_found("Blog"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found("Blog"));
        }

        Ok(())
    }
}
