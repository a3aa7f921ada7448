//! Handler for the like endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::like::LikeResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Increments the like counter for a post.
///
/// # Endpoint
///
/// `POST /api/posts/{id}/like`
///
/// The request carries no body; the post id in the path is the only
/// input. The increment happens atomically in the database, so
/// concurrent likes never lose updates.
///
/// # Response
///
/// ```json
/// { "likes": 8 }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid session and 404 Not Found if
/// the post doesn't exist.
pub async fn like_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<LikeResponse>, AppError> {
    let likes = state.engagement_service.like_post(post_id).await?;

    tracing::debug!(post_id, likes, "post liked");

    Ok(Json(LikeResponse { likes }))
}
