//! Post detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};

use crate::domain::entities::{Comment, Post};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::logged_in;

/// Template for a single post with its comments.
#[derive(Template, WebTemplate)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub logged_in: bool,
}

/// Renders a post with its comments and records a view.
///
/// # Endpoint
///
/// `GET /posts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the post doesn't exist.
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let post = state.post_service.get_post(id).await?;
    let comments = state.comment_service.list_comments(id).await?;

    state.record_view(post.id);

    Ok(PostTemplate {
        post,
        comments,
        logged_in: logged_in(&state, &headers),
    })
}
