//! Comment creation and listing service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;

/// Service for comments on posts.
///
/// Verifies the target post exists before writing, so a comment on a deleted
/// post surfaces as 404 rather than a foreign-key error.
pub struct CommentService {
    comment_repository: Arc<dyn CommentRepository>,
    post_repository: Arc<dyn PostRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        post_repository: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            comment_repository,
            post_repository,
        }
    }

    /// Adds a comment by `author_id` to a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown post and
    /// [`AppError::Internal`] on database errors.
    pub async fn add_comment(
        &self,
        post_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Comment, AppError> {
        if self.post_repository.find_by_id(post_id).await?.is_none() {
            return Err(AppError::not_found(
                "Post not found",
                json!({ "id": post_id }),
            ));
        }

        self.comment_repository
            .create(NewComment {
                post_id,
                author_id,
                text,
            })
            .await
    }

    /// Lists comments for a post, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown post.
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        if self.post_repository.find_by_id(post_id).await?.is_none() {
            return Err(AppError::not_found(
                "Post not found",
                json!({ "id": post_id }),
            ));
        }

        self.comment_repository.list_for_post(post_id).await
    }

    /// Counts comments on a post. An unknown post counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_comments(&self, post_id: i64) -> Result<i64, AppError> {
        self.comment_repository.count_for_post(post_id).await
    }
}
