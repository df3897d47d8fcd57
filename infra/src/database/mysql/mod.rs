//! MySQL repository implementations

pub mod author_repository_impl;
pub mod blog_post_repository_impl;

pub use author_repository_impl::MySqlAuthorRepository;
pub use blog_post_repository_impl::MySqlBlogPostRepository;
