//! In-memory implementation of BlogPostRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::blog_post::BlogPost;
use crate::errors::DomainError;

use super::trait_::BlogPostRepository;

/// Blog post repository holding records in a process-local map
#[derive(Clone, Default)]
pub struct InMemoryBlogPostRepository {
    posts: Arc<RwLock<HashMap<Uuid, BlogPost>>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted<'a>(posts: impl Iterator<Item = &'a BlogPost>) -> Vec<BlogPost> {
        let mut all: Vec<BlogPost> = posts.cloned().collect();
        all.sort_by_key(|p| p.created_at);
        all
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, DomainError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let posts = self.posts.read().await;
        Ok(Self::sorted(posts.values()))
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<BlogPost>, DomainError> {
        let posts = self.posts.read().await;
        Ok(Self::sorted(
            posts.values().filter(|p| p.author_id == author_id),
        ))
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, DomainError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, DomainError> {
        let mut posts = self.posts.write().await;

        match posts.get_mut(&post.id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(post)
            }
            None => Err(DomainError::NotFound {
                resource: "Blog post".to_string(),
            }),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}
