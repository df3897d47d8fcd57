//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    Author, AuthorProfile, BlogPost, BlogPostWithAuthor, Claims, IdentityClaim, ReadTime, Role,
};
pub use value_objects::AuthToken;
