//! Blog post repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::blog_post::BlogPost;
use crate::errors::DomainError;

/// Repository trait for BlogPost persistence operations
///
/// Same contract as [`crate::repositories::AuthorRepository`]: store problems
/// are `DomainError::StoreFault`, a missing record is `None` or `false`.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Find a post by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, DomainError>;

    /// List all posts, oldest first
    async fn list(&self) -> Result<Vec<BlogPost>, DomainError>;

    /// List the posts owned by one author, oldest first
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<BlogPost>, DomainError>;

    /// Insert a new post
    async fn create(&self, post: BlogPost) -> Result<BlogPost, DomainError>;

    /// Replace an existing post in place
    ///
    /// # Returns
    /// * `Ok(BlogPost)` - The updated post
    /// * `Err(DomainError::NotFound)` - No post with that ID
    /// * `Err(DomainError)` - Store fault
    async fn update(&self, post: BlogPost) -> Result<BlogPost, DomainError>;

    /// Delete a post, `Ok(false)` when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
