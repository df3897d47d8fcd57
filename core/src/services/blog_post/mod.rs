//! Blog post service module
//!
//! Post CRUD on behalf of an authenticated author. Reads are open; writes
//! require the post's owner or an administrator.

mod service;

#[cfg(test)]
mod tests;

pub use service::{BlogPostService, BlogPostUpdate, NewBlogPost};
