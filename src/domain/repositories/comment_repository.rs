//! Repository trait for comment data access.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comments on posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Creates a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a missing
    /// post (foreign key violation); callers verify the post first.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Lists comments for a post, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Counts comments for a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for_post(&self, post_id: i64) -> Result<i64, AppError>;
}
