//! "My posts" page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::IntoResponse,
};

use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::Post;
use crate::domain::repositories::PostFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the authenticated user's post list.
#[derive(Template, WebTemplate)]
#[template(path = "my_posts.html")]
pub struct MyPostsTemplate {
    pub posts: Vec<Post>,
    pub logged_in: bool,
}

/// Renders the posts authored by the authenticated user, newest first.
///
/// # Endpoint
///
/// `GET /my-posts`
pub async fn my_posts_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PostFilter {
        author_id: Some(current.id),
        query: None,
    };

    let (posts, _) = state.post_service.list_posts(0, 100, filter).await?;

    Ok(MyPostsTemplate {
        posts,
        logged_in: true,
    })
}
