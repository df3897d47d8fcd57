//! MySQL implementation of the BlogPostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bh_core::domain::entities::blog_post::{BlogPost, ReadTime};
use bh_core::errors::DomainError;
use bh_core::repositories::BlogPostRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, author_id, category, title, cover, read_time_value,
           read_time_unit, content, created_at, updated_at
    FROM blog_posts
"#;

/// MySQL implementation of BlogPostRepository
pub struct MySqlBlogPostRepository {
    pool: MySqlPool,
}

impl MySqlBlogPostRepository {
    /// Create a new MySQL blog post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_uuid(row: &sqlx::mysql::MySqlRow, column: &str) -> Result<Uuid, DomainError> {
        let value: String = row
            .try_get(column)
            .map_err(|e| DomainError::store(format!("Failed to get {}: {}", column, e)))?;
        Uuid::parse_str(&value).map_err(|e| DomainError::store(format!("Invalid UUID: {}", e)))
    }

    /// Convert database row to BlogPost entity
    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<BlogPost, DomainError> {
        let get_text = |column: &str| -> Result<String, DomainError> {
            row.try_get(column)
                .map_err(|e| DomainError::store(format!("Failed to get {}: {}", column, e)))
        };

        Ok(BlogPost {
            id: Self::parse_uuid(row, "id")?,
            author_id: Self::parse_uuid(row, "author_id")?,
            category: get_text("category")?,
            title: get_text("title")?,
            cover: get_text("cover")?,
            read_time: ReadTime {
                value: row.try_get::<u32, _>("read_time_value").map_err(|e| {
                    DomainError::store(format!("Failed to get read_time_value: {}", e))
                })?,
                unit: get_text("read_time_unit")?,
            },
            content: get_text("content")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::store(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::store(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn map_error(error: sqlx::Error) -> DomainError {
        tracing::error!(error = %error, "Blog post query failed");
        DomainError::store(format!("Database query failed: {}", error))
    }

    async fn fetch_many(
        &self,
        query: &str,
        author_id: Option<Uuid>,
    ) -> Result<Vec<BlogPost>, DomainError> {
        let mut statement = sqlx::query(query);
        if let Some(author_id) = author_id {
            statement = statement.bind(author_id.to_string());
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(Self::map_error)?;

        rows.iter().map(Self::row_to_post).collect()
    }
}

#[async_trait]
impl BlogPostRepository for MySqlBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_error)?;

        result.as_ref().map(Self::row_to_post).transpose()
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let query = format!("{} ORDER BY created_at ASC", SELECT_COLUMNS);
        self.fetch_many(&query, None).await
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<BlogPost>, DomainError> {
        let query = format!("{} WHERE author_id = ? ORDER BY created_at ASC", SELECT_COLUMNS);
        self.fetch_many(&query, Some(author_id)).await
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, DomainError> {
        let query = r#"
            INSERT INTO blog_posts (
                id, author_id, category, title, cover, read_time_value,
                read_time_unit, content, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(post.author_id.to_string())
            .bind(&post.category)
            .bind(&post.title)
            .bind(&post.cover)
            .bind(post.read_time.value)
            .bind(&post.read_time.unit)
            .bind(&post.content)
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_error)?;

        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, DomainError> {
        let query = r#"
            UPDATE blog_posts
            SET category = ?, title = ?, cover = ?, read_time_value = ?,
                read_time_unit = ?, content = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&post.category)
            .bind(&post.title)
            .bind(&post.cover)
            .bind(post.read_time.value)
            .bind(&post.read_time.unit)
            .bind(&post.content)
            .bind(post.updated_at)
            .bind(post.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Blog post".to_string(),
            });
        }

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_error)?;

        Ok(result.rows_affected() > 0)
    }
}
