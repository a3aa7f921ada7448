//! Like counter service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Service applying like actions to posts.
///
/// The increment is a single atomic SQL update; concurrent likes from
/// independent clients are never lost. There is deliberately no per-user
/// dedup: every accepted request adds one, matching the endpoint contract.
pub struct EngagementService {
    post_repository: Arc<dyn PostRepository>,
}

impl EngagementService {
    /// Creates a new engagement service.
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Increments a post's like counter and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown post and
    /// [`AppError::Internal`] on database errors.
    pub async fn like_post(&self, post_id: i64) -> Result<i64, AppError> {
        self.post_repository
            .increment_likes(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": post_id })))
    }
}
