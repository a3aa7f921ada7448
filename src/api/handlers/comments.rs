//! Handlers for comment endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::comment::{CommentRequest, CommentResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a comment to a post.
///
/// # Endpoint
///
/// `POST /api/posts/{id}/comments`
///
/// # Request Body
///
/// ```json
/// { "text": "Nice write-up!" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 404 Not Found if the
/// post doesn't exist.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    payload.validate()?;

    let comment = state
        .comment_service
        .add_comment(post_id, current.id, payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// Lists comments for a post, newest first.
///
/// # Endpoint
///
/// `GET /api/posts/{id}/comments`
///
/// # Errors
///
/// Returns 404 Not Found if the post doesn't exist.
pub async fn comment_list_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = state.comment_service.list_comments(post_id).await?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
