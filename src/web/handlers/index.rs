//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
};

use crate::domain::entities::Post;
use crate::domain::repositories::PostFilter;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::logged_in;

/// A post with the counters shown on its home page card.
pub struct PostCard {
    pub post: Post,
    pub comment_count: i64,
}

/// Template for the home page listing recent posts.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cards: Vec<PostCard>,
    pub logged_in: bool,
}

/// Renders the home page with recent posts, newest first.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (posts, _) = state
        .post_service
        .list_posts(0, 25, PostFilter::default())
        .await?;

    let mut cards = Vec::with_capacity(posts.len());
    for post in posts {
        let comment_count = state.comment_service.count_comments(post.id).await?;
        cards.push(PostCard {
            post,
            comment_count,
        });
    }

    Ok(IndexTemplate {
        cards,
        logged_in: logged_in(&state, &headers),
    })
}
