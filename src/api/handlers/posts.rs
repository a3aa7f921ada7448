//! Handlers for post CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::PostQueryParams;
use crate::api::dto::post::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::PostPatch;
use crate::domain::repositories::PostFilter;
use crate::error::AppError;
use crate::infrastructure::storage::ImageKind;
use crate::state::AppState;

/// Publishes a new post.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Hello",
///   "content": "First post."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    payload.validate()?;

    let post = state
        .post_service
        .create_post(current.id, payload.title, payload.content, None)
        .await?;

    tracing::info!(post_id = post.id, author_id = current.id, "post published");

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Retrieves a single post and records a view.
///
/// # Endpoint
///
/// `GET /api/posts/{id}`
///
/// # View Tracking
///
/// View events are sent to a bounded channel for async processing. If the
/// queue is full, the view is dropped (fire-and-forget).
///
/// # Errors
///
/// Returns 404 Not Found if the post doesn't exist.
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.post_service.get_post(id).await?;

    state.record_view(post.id);

    Ok(Json(PostResponse::from(post)))
}

/// Lists posts newest-first with pagination and filters.
///
/// # Endpoint
///
/// `GET /api/posts`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, 10-100)
/// - `q` (optional): Case-insensitive search over title and content
/// - `author` (optional): Filter by author id
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn post_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PostQueryParams>,
) -> Result<Json<PostListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let filter = PostFilter {
        author_id: params.author,
        query: params.q,
    };

    let (posts, total) = state.post_service.list_posts(offset, limit, filter).await?;

    Ok(Json(PostListResponse {
        total,
        page: params.pagination.page(),
        page_size: params.pagination.page_size(),
        items: posts.into_iter().map(PostResponse::from).collect(),
    }))
}

/// Partially updates a post owned by the authenticated user.
///
/// # Endpoint
///
/// `PATCH /api/posts/{id}`
///
/// # Errors
///
/// Returns 400 for an empty patch, 403 when the caller is not the
/// author, and 404 for an unknown post.
pub async fn update_post_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    payload.validate()?;

    let patch = PostPatch {
        title: payload.title,
        content: payload.content,
        image: None,
    };

    let post = state.post_service.update_post(id, current.id, patch).await?;

    Ok(Json(PostResponse::from(post)))
}

/// Replaces the header image of a post owned by the authenticated user.
///
/// # Endpoint
///
/// `PUT /api/posts/{id}/image`
///
/// # Form Fields
///
/// - `image` - png, jpg, jpeg, or gif
///
/// The file is stored before the ownership check runs, so a forbidden
/// request can leave an orphaned upload; nothing references it.
///
/// # Errors
///
/// Returns 400 for a missing file or unsupported type, 403 when the
/// caller is not the author, and 404 for an unknown post.
pub async fn update_post_image_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<PostResponse>, AppError> {
    let (original_name, bytes) = super::read_image_upload(&mut multipart).await?;

    let stored = state
        .image_store
        .save(ImageKind::Post, &original_name, bytes)
        .await?;

    let patch = PostPatch {
        title: None,
        content: None,
        image: Some(stored),
    };
    let post = state.post_service.update_post(id, current.id, patch).await?;

    tracing::info!(post_id = id, author_id = current.id, "post image replaced");

    Ok(Json(PostResponse::from(post)))
}

/// Deletes a post owned by the authenticated user.
///
/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Errors
///
/// Returns 403 when the caller is not the author and 404 for an unknown
/// post.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(id, current.id).await?;

    tracing::info!(post_id = id, author_id = current.id, "post deleted");

    Ok(StatusCode::NO_CONTENT)
}
