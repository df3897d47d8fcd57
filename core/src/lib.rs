//! # BlogHub Core
//!
//! Core business logic and domain layer for the BlogHub backend.
//! This crate contains the author entity, the credential store, the token
//! service, the access guards, the blog post service, repository interfaces
//! and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Author, AuthorProfile, AuthToken, BlogPost, BlogPostWithAuthor, Claims, IdentityClaim,
    ReadTime, Role,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    AuthorRepository, BlogPostRepository, InMemoryAuthorRepository, InMemoryBlogPostRepository,
};
pub use services::{
    Authenticator, AuthorService, AuthorUpdate, BlogPostService, BlogPostUpdate, CredentialStore,
    GuardOutcome, NewAuthor, NewBlogPost, PasswordGuard, PasswordHasher, TokenGuard, TokenService,
    TokenServiceConfig,
};
