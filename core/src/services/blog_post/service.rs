//! Blog post service implementation

use std::sync::Arc;

use bh_shared::utils::{validation, ValidationErrors};
use uuid::Uuid;

use crate::domain::entities::blog_post::{BlogPost, BlogPostWithAuthor, ReadTime};
use crate::domain::entities::claims::IdentityClaim;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AuthorRepository, BlogPostRepository};

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub category: String,
    pub title: String,
    pub cover: String,
    pub read_time: ReadTime,
    pub content: String,
}

/// Partial update of a post; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct BlogPostUpdate {
    pub category: Option<String>,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub read_time: Option<ReadTime>,
    pub content: Option<String>,
}

fn validate_read_time(read_time: &ReadTime, errors: &mut ValidationErrors) {
    if read_time.value == 0 {
        errors.add_error("read_time.value", "must be positive", "range");
    }
    validation::validate_required("read_time.unit", &read_time.unit, errors);
}

impl NewBlogPost {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::validate_required("category", &self.category, &mut errors);
        validation::validate_required("title", &self.title, &mut errors);
        validation::validate_required("cover", &self.cover, &mut errors);
        validation::validate_required("content", &self.content, &mut errors);
        validate_read_time(&self.read_time, &mut errors);
        errors.into_result()
    }
}

impl BlogPostUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("category", &self.category),
            ("title", &self.title),
            ("cover", &self.cover),
            ("content", &self.content),
        ] {
            if let Some(value) = value {
                validation::validate_required(field, value, &mut errors);
            }
        }
        if let Some(read_time) = &self.read_time {
            validate_read_time(read_time, &mut errors);
        }

        errors.into_result()
    }
}

/// Blog post use cases
pub struct BlogPostService<A: AuthorRepository, P: BlogPostRepository> {
    authors: Arc<A>,
    posts: Arc<P>,
}

impl<A: AuthorRepository, P: BlogPostRepository> BlogPostService<A, P> {
    pub fn new(authors: Arc<A>, posts: Arc<P>) -> Self {
        Self { authors, posts }
    }

    fn not_found() -> DomainError {
        DomainError::NotFound {
            resource: "Blog post".to_string(),
        }
    }

    /// Loads a post that `actor` is allowed to change
    async fn find_managed(&self, actor: &IdentityClaim, id: Uuid) -> DomainResult<BlogPost> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        if !actor.can_manage(post.author_id) {
            return Err(AuthError::InsufficientPermissions.into());
        }
        Ok(post)
    }

    /// Publishes a post owned by `actor`
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Validation)` - A required field is blank
    /// * `Err(DomainError::NotFound)` - The actor's author record no longer exists
    pub async fn create(&self, actor: &IdentityClaim, input: NewBlogPost) -> DomainResult<BlogPost> {
        input.validate()?;

        if self.authors.find_by_id(actor.id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "Author".to_string(),
            });
        }

        let post = BlogPost::new(
            actor.id,
            input.category.trim().to_string(),
            input.title.trim().to_string(),
            input.cover.trim().to_string(),
            input.read_time,
            input.content,
        );
        let post = self.posts.create(post).await?;
        tracing::info!(post_id = %post.id, author_id = %actor.id, "Blog post created");

        Ok(post)
    }

    /// Fetches one post with its author's profile
    pub async fn get(&self, id: Uuid) -> DomainResult<BlogPostWithAuthor> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;
        let author = self.authors.find_by_id(post.author_id).await?;

        Ok(BlogPostWithAuthor {
            post,
            author: author.map(Into::into),
        })
    }

    /// Lists all posts, oldest first
    pub async fn list(&self) -> DomainResult<Vec<BlogPost>> {
        self.posts.list().await
    }

    /// Lists the posts owned by one author
    pub async fn list_by_author(&self, author_id: Uuid) -> DomainResult<Vec<BlogPost>> {
        self.posts.list_by_author(author_id).await
    }

    /// Applies a partial update on behalf of `actor`
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - Unknown post
    /// * `Err(AuthError::InsufficientPermissions)` - Actor is neither the owner nor an admin
    pub async fn update(
        &self,
        actor: &IdentityClaim,
        id: Uuid,
        update: BlogPostUpdate,
    ) -> DomainResult<BlogPost> {
        let mut post = self.find_managed(actor, id).await?;
        update.validate()?;

        if let Some(category) = update.category {
            post.category = category.trim().to_string();
        }
        if let Some(title) = update.title {
            post.title = title.trim().to_string();
        }
        if let Some(cover) = update.cover {
            post.cover = cover.trim().to_string();
        }
        if let Some(read_time) = update.read_time {
            post.read_time = read_time;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        post.touch();

        let post = self.posts.update(post).await?;
        tracing::info!(post_id = %post.id, actor_id = %actor.id, "Blog post updated");

        Ok(post)
    }

    /// Deletes a post on behalf of `actor`
    pub async fn delete(&self, actor: &IdentityClaim, id: Uuid) -> DomainResult<()> {
        let post = self.find_managed(actor, id).await?;

        if !self.posts.delete(post.id).await? {
            return Err(Self::not_found());
        }

        tracing::info!(post_id = %id, actor_id = %actor.id, "Blog post deleted");
        Ok(())
    }
}
