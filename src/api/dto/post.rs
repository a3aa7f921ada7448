//! DTOs for post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Post;

/// Request to create a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,
}

/// Partial update for a post. Only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,
}

/// JSON representation of a post.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            author: post.author_name,
            title: post.title,
            content: post.content,
            image: post.image,
            likes: post.likes,
            views: post.views,
            created_at: post.created_at,
        }
    }
}

/// Paginated post listing.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<PostResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let valid = CreatePostRequest {
            title: "Hello".to_string(),
            content: "Body".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            content: "Body".to_string(),
        };
        assert!(empty_title.validate().is_err());

        let oversized_title = CreatePostRequest {
            title: "t".repeat(201),
            content: "Body".to_string(),
        };
        assert!(oversized_title.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_absent_fields() {
        let patch: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.validate().is_ok());
        assert!(patch.title.is_none());

        let patch: UpdatePostRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(patch.validate().is_err());
    }
}
