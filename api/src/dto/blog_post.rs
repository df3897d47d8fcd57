use serde::{Deserialize, Serialize};
use validator::Validate;

use bh_core::domain::entities::blog_post::ReadTime;
use bh_core::services::blog_post::{BlogPostUpdate, NewBlogPost};

/// Reading time; a zero `value` is rejected by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadTimeRequest {
    pub value: u32,
    pub unit: String,
}

impl From<ReadTimeRequest> for ReadTime {
    fn from(request: ReadTimeRequest) -> Self {
        ReadTime::new(request.value, request.unit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBlogPostRequest {
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Cover image URL
    #[validate(url)]
    pub cover: String,

    pub read_time: ReadTimeRequest,

    #[validate(length(min = 1))]
    pub content: String,
}

impl From<CreateBlogPostRequest> for NewBlogPost {
    fn from(request: CreateBlogPostRequest) -> Self {
        Self {
            category: request.category,
            title: request.title,
            cover: request.cover,
            read_time: request.read_time.into(),
            content: request.content,
        }
    }
}

/// Partial post update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBlogPostRequest {
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(url)]
    pub cover: Option<String>,

    pub read_time: Option<ReadTimeRequest>,

    #[validate(length(min = 1))]
    pub content: Option<String>,
}

impl From<UpdateBlogPostRequest> for BlogPostUpdate {
    fn from(request: UpdateBlogPostRequest) -> Self {
        Self {
            category: request.category,
            title: request.title,
            cover: request.cover,
            read_time: request.read_time.map(Into::into),
            content: request.content,
        }
    }
}
