//! Domain entities representing core business objects.

pub mod author;
pub mod blog_post;
pub mod claims;

// Re-export commonly used types
pub use author::{Author, AuthorProfile, Role};
pub use blog_post::{BlogPost, BlogPostWithAuthor, ReadTime};
pub use claims::{Claims, IdentityClaim, JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
