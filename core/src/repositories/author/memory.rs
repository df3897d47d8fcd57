//! In-memory implementation of AuthorRepository
//!
//! Backs the test suites and storeless development runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::author::Author;
use crate::errors::{AuthError, DomainError};

use super::trait_::AuthorRepository;

/// Author repository holding records in a process-local map
#[derive(Clone)]
pub struct InMemoryAuthorRepository {
    authors: Arc<RwLock<HashMap<Uuid, Author>>>,
}

impl InMemoryAuthorRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            authors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored authors
    pub async fn len(&self) -> usize {
        self.authors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.authors.read().await.is_empty()
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError> {
        let authors = self.authors.read().await;
        Ok(authors.get(&id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, DomainError> {
        let authors = self.authors.read().await;
        Ok(authors.values().find(|a| a.user_name == user_name).cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, DomainError> {
        let authors = self.authors.read().await;
        let mut all: Vec<Author> = authors.values().cloned().collect();
        all.sort_by_key(|a| a.created_at);
        Ok(all)
    }

    async fn create(&self, author: Author) -> Result<Author, DomainError> {
        let mut authors = self.authors.write().await;

        if authors.values().any(|a| a.user_name == author.user_name) {
            return Err(AuthError::UserAlreadyExists {
                user_name: author.user_name,
            }
            .into());
        }

        authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, author: Author) -> Result<Author, DomainError> {
        let mut authors = self.authors.write().await;

        if !authors.contains_key(&author.id) {
            return Err(DomainError::NotFound {
                resource: "Author".to_string(),
            });
        }

        if authors
            .values()
            .any(|a| a.id != author.id && a.user_name == author.user_name)
        {
            return Err(AuthError::UserAlreadyExists {
                user_name: author.user_name,
            }
            .into());
        }

        authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut authors = self.authors.write().await;
        Ok(authors.remove(&id).is_some())
    }

    async fn exists_by_user_name(&self, user_name: &str) -> Result<bool, DomainError> {
        let authors = self.authors.read().await;
        Ok(authors.values().any(|a| a.user_name == user_name))
    }
}
