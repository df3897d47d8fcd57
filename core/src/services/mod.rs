//! Business services containing domain logic and use cases.

pub mod author;
pub mod blog_post;
pub mod credentials;
pub mod guard;
pub mod token;

// Re-export commonly used types
pub use author::{AuthorService, AuthorUpdate, NewAuthor};
pub use blog_post::{BlogPostService, BlogPostUpdate, NewBlogPost};
pub use credentials::{CredentialStore, PasswordHasher};
pub use guard::{Authenticator, GuardOutcome, PasswordGuard, TokenGuard};
pub use token::{TokenService, TokenServiceConfig};
