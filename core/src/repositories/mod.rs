pub mod author;
pub mod blog_post;

pub use author::{AuthorRepository, InMemoryAuthorRepository};
pub use blog_post::{BlogPostRepository, InMemoryBlogPostRepository};
