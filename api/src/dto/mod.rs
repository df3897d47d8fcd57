pub mod auth;
pub mod blog_post;
pub mod error;

pub use auth::{RegisterRequest, UpdateAuthorRequest};
pub use blog_post::{CreateBlogPostRequest, ReadTimeRequest, UpdateBlogPostRequest};
pub use error::{ErrorResponse, ErrorResponseExt};
