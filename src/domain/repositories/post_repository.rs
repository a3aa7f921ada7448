//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Listing filter for posts.
///
/// `query` matches title or content (case-insensitive substring), mirroring
/// the search behavior of the public listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub author_id: Option<i64>,
    pub query: Option<String>,
}

/// Repository interface for post storage and engagement counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists posts newest-first with pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64, filter: PostFilter)
    -> Result<Vec<Post>, AppError>;

    /// Counts posts matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filter: PostFilter) -> Result<i64, AppError>;

    /// Partially updates a post.
    ///
    /// Only fields present in [`PostPatch`] are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError>;

    /// Deletes a post and its comments (cascade).
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the like counter.
    ///
    /// Returns the new like count, or `None` if the post does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_likes(&self, id: i64) -> Result<Option<i64>, AppError>;

    /// Atomically increments the view counter.
    ///
    /// Returns `Ok(true)` if a row was updated. Called by the background
    /// view worker, never from request handlers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_views(&self, id: i64) -> Result<bool, AppError>;
}
