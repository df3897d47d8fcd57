//! Blog post entity: the resource the access guards protect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::AuthorProfile;

/// Estimated reading time, e.g. `{ "value": 5, "unit": "minutes" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTime {
    pub value: u32,
    pub unit: String,
}

impl ReadTime {
    pub fn new(value: u32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// A published blog post owned by a single author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier for the post
    pub id: Uuid,

    /// Author who created the post and may edit it
    pub author_id: Uuid,

    pub category: String,
    pub title: String,

    /// Cover image URL
    pub cover: String,

    pub read_time: ReadTime,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Creates a new post owned by `author_id`
    pub fn new(
        author_id: Uuid,
        category: String,
        title: String,
        cover: String,
        read_time: ReadTime,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            category,
            title,
            cover,
            read_time,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A post together with the public profile of its author
///
/// `author` is `null` once the owning author has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostWithAuthor {
    #[serde(flatten)]
    pub post: BlogPost,
    pub author: Option<AuthorProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost::new(
            Uuid::new_v4(),
            "rust".to_string(),
            "Ownership in practice".to_string(),
            "https://img.example.com/cover.png".to_string(),
            ReadTime::new(7, "minutes"),
            "Borrowing rules, explained.".to_string(),
        )
    }

    #[test]
    fn test_new_post_timestamps() {
        let post = sample();
        assert_eq!(post.created_at, post.updated_at);

        let mut touched = post.clone();
        touched.touch();
        assert!(touched.updated_at >= post.updated_at);
    }

    #[test]
    fn test_with_author_flattens_post_fields() {
        let post = sample();
        let json = serde_json::to_value(BlogPostWithAuthor {
            post: post.clone(),
            author: None,
        })
        .unwrap();

        assert_eq!(json["id"], post.id.to_string());
        assert_eq!(json["title"], "Ownership in practice");
        assert_eq!(json["read_time"]["value"], 7);
        assert_eq!(json["read_time"]["unit"], "minutes");
        assert!(json["author"].is_null());
    }
}
