//! Repository doubles for credential and author service tests

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::author::Author;
use crate::errors::DomainError;
use crate::repositories::AuthorRepository;

/// Repository whose every call fails as if the store were unreachable
pub struct UnavailableAuthorRepository;

fn unavailable() -> DomainError {
    DomainError::store("connection refused")
}

#[async_trait]
impl AuthorRepository for UnavailableAuthorRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Author>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_user_name(&self, _user_name: &str) -> Result<Option<Author>, DomainError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Author>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _author: Author) -> Result<Author, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _author: Author) -> Result<Author, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn exists_by_user_name(&self, _user_name: &str) -> Result<bool, DomainError> {
        Err(unavailable())
    }
}
