//! Author repository trait defining the interface to the identity store.
//!
//! The store is an external collaborator. It owns durability and enforces
//! `user_name` uniqueness; this crate only relies on single-record atomic
//! inserts and updates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::author::Author;
use crate::errors::DomainError;

/// Repository trait for Author persistence operations
///
/// Every method returns `DomainError::StoreFault` for connectivity or
/// corruption problems. "Not found" is never an error at this level.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use bh_core::repositories::AuthorRepository;
/// use bh_core::domain::entities::author::Author;
/// use bh_core::errors::DomainError;
///
/// struct DocumentStoreAuthorRepository {
///     // client handle
/// }
///
/// #[async_trait]
/// impl AuthorRepository for DocumentStoreAuthorRepository {
///     async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError> { Ok(None) }
/// #   async fn list(&self) -> Result<Vec<Author>, DomainError> { Ok(vec![]) }
/// #   async fn create(&self, author: Author) -> Result<Author, DomainError> { Ok(author) }
/// #   async fn update(&self, author: Author) -> Result<Author, DomainError> { Ok(author) }
/// #   async fn delete(&self, id: Uuid) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn exists_by_user_name(&self, user_name: &str) -> Result<bool, DomainError> { Ok(false) }
/// }
/// ```
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find an author by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Author))` - Author found
    /// * `Ok(None)` - No author with the given ID
    /// * `Err(DomainError)` - Store fault
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError>;

    /// Find an author by their login name
    ///
    /// # Returns
    /// * `Ok(Some(Author))` - Author found
    /// * `Ok(None)` - No author with the given user name
    /// * `Err(DomainError)` - Store fault
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, DomainError>;

    /// List all authors, oldest first
    async fn list(&self) -> Result<Vec<Author>, DomainError>;

    /// Insert a new author
    ///
    /// # Returns
    /// * `Ok(Author)` - The stored author
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Duplicate user name
    /// * `Err(DomainError)` - Store fault
    async fn create(&self, author: Author) -> Result<Author, DomainError>;

    /// Replace an existing author in place
    ///
    /// # Returns
    /// * `Ok(Author)` - The updated author
    /// * `Err(DomainError::NotFound)` - No author with that ID
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - User name taken by another author
    /// * `Err(DomainError)` - Store fault
    async fn update(&self, author: Author) -> Result<Author, DomainError>;

    /// Delete an author
    ///
    /// # Returns
    /// * `Ok(true)` - Author was deleted
    /// * `Ok(false)` - Author not found
    /// * `Err(DomainError)` - Store fault
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check if a user name is already taken
    async fn exists_by_user_name(&self, user_name: &str) -> Result<bool, DomainError>;
}
