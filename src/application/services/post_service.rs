//! Post creation, retrieval, and ownership-checked mutation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::domain::repositories::{PostFilter, PostRepository};
use crate::error::AppError;

/// Service for managing posts.
///
/// Enforces that update and delete are restricted to the post's author;
/// handlers only supply the acting user's id.
pub struct PostService {
    post_repository: Arc<dyn PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    /// Creates a post authored by `author_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_post(
        &self,
        author_id: i64,
        title: String,
        content: String,
        image: Option<String>,
    ) -> Result<Post, AppError> {
        self.post_repository
            .create(NewPost {
                author_id,
                title,
                content,
                image,
            })
            .await
    }

    /// Retrieves a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches.
    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        self.post_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    /// Lists posts newest-first with the total count for pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_posts(
        &self,
        offset: i64,
        limit: i64,
        filter: PostFilter,
    ) -> Result<(Vec<Post>, i64), AppError> {
        let posts = self
            .post_repository
            .list(offset, limit, filter.clone())
            .await?;
        let total = self.post_repository.count(filter).await?;

        Ok((posts, total))
    }

    /// Partially updates a post owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown post,
    /// [`AppError::Forbidden`] when `user_id` is not the author, and
    /// [`AppError::Validation`] for an empty patch.
    pub async fn update_post(
        &self,
        id: i64,
        user_id: i64,
        patch: PostPatch,
    ) -> Result<Post, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "Nothing to update",
                json!({ "id": id }),
            ));
        }

        let post = self.get_post(id).await?;
        if !post.is_owned_by(user_id) {
            return Err(AppError::forbidden(
                "Only the author can edit this post",
                json!({ "id": id }),
            ));
        }

        self.post_repository.update(id, patch).await
    }

    /// Deletes a post owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown post and
    /// [`AppError::Forbidden`] when `user_id` is not the author.
    pub async fn delete_post(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let post = self.get_post(id).await?;
        if !post.is_owned_by(user_id) {
            return Err(AppError::forbidden(
                "Only the author can delete this post",
                json!({ "id": id }),
            ));
        }

        let deleted = self.post_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Post not found", json!({ "id": id })));
        }

        Ok(())
    }
}
