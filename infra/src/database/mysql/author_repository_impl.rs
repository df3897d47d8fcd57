//! MySQL implementation of the AuthorRepository trait.
//!
//! Persists authors in the `authors` table. The UNIQUE index on `user_name`
//! is the final arbiter for duplicate registrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bh_core::domain::entities::author::{Author, Role};
use bh_core::errors::{AuthError, DomainError};
use bh_core::repositories::AuthorRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, last_name, user_name, password_hash,
           role, created_at, updated_at
    FROM authors
"#;

/// MySQL implementation of AuthorRepository
pub struct MySqlAuthorRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAuthorRepository {
    /// Create a new MySQL author repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Author entity
    fn row_to_author(row: &sqlx::mysql::MySqlRow) -> Result<Author, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::store(format!("Failed to get role: {}", e)))?;

        Ok(Author::restore(
            Uuid::parse_str(&id).map_err(|e| DomainError::store(format!("Invalid UUID: {}", e)))?,
            row.try_get("first_name")
                .map_err(|e| DomainError::store(format!("Failed to get first_name: {}", e)))?,
            row.try_get("last_name")
                .map_err(|e| DomainError::store(format!("Failed to get last_name: {}", e)))?,
            row.try_get("user_name")
                .map_err(|e| DomainError::store(format!("Failed to get user_name: {}", e)))?,
            row.try_get("password_hash")
                .map_err(|e| DomainError::store(format!("Failed to get password_hash: {}", e)))?,
            role.parse::<Role>().map_err(DomainError::store)?,
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::store(format!("Failed to get created_at: {}", e)))?,
            row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::store(format!("Failed to get updated_at: {}", e)))?,
        ))
    }

    /// Maps a write failure, turning unique-index violations into `UserAlreadyExists`
    fn map_write_error(error: sqlx::Error, user_name: &str) -> DomainError {
        if is_unique_violation(&error) {
            return AuthError::UserAlreadyExists {
                user_name: user_name.to_string(),
            }
            .into();
        }
        tracing::error!(error = %error, "Author write failed");
        DomainError::store(format!("Database query failed: {}", error))
    }

    fn map_read_error(error: sqlx::Error) -> DomainError {
        tracing::error!(error = %error, "Author query failed");
        DomainError::store(format!("Database query failed: {}", error))
    }
}

/// MySQL reports duplicate keys as error 1062 with SQLSTATE 23000
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error.as_database_error() {
        Some(db_error) => {
            db_error.is_unique_violation()
                || db_error.code().map(|code| code == "23000").unwrap_or(false)
        }
        None => false,
    }
}

#[async_trait]
impl AuthorRepository for MySqlAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_read_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_author(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, DomainError> {
        let query = format!("{} WHERE user_name = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_read_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_author(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Author>, DomainError> {
        let query = format!("{} ORDER BY created_at ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(Self::map_read_error)?;

        rows.iter().map(Self::row_to_author).collect()
    }

    async fn create(&self, author: Author) -> Result<Author, DomainError> {
        let query = r#"
            INSERT INTO authors (
                id, first_name, last_name, user_name, password_hash,
                role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(author.id.to_string())
            .bind(&author.first_name)
            .bind(&author.last_name)
            .bind(&author.user_name)
            .bind(author.password_hash())
            .bind(author.role.as_str())
            .bind(author.created_at)
            .bind(author.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &author.user_name))?;

        Ok(author)
    }

    async fn update(&self, author: Author) -> Result<Author, DomainError> {
        let query = r#"
            UPDATE authors
            SET first_name = ?, last_name = ?, user_name = ?, password_hash = ?,
                role = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&author.first_name)
            .bind(&author.last_name)
            .bind(&author.user_name)
            .bind(author.password_hash())
            .bind(author.role.as_str())
            .bind(author.updated_at)
            .bind(author.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &author.user_name))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Author".to_string(),
            });
        }

        Ok(author)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_read_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_user_name(&self, user_name: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM authors WHERE user_name = ?")
            .bind(user_name)
            .fetch_one(&self.pool)
            .await
            .map_err(Self::map_read_error)?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| DomainError::store(format!("Failed to get count: {}", e)))?;

        Ok(count > 0)
    }
}
