//! API route configuration.
//!
//! Write endpoints require the signed session cookie checked by
//! [`crate::api::middleware::auth`]; reads are open.

use crate::api::handlers::{
    comment_list_handler, create_comment_handler, create_post_handler, delete_post_handler,
    get_post_handler, like_handler, login_handler, logout_handler, me_handler, post_list_handler,
    profile_image_handler, register_handler, update_post_handler, update_post_image_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /auth/register`       - Create an account and start a session
/// - `POST /auth/login`          - Verify credentials and start a session
/// - `GET  /posts`               - List posts (paginated, searchable)
/// - `GET  /posts/{id}`          - Fetch a single post (records a view)
/// - `GET  /posts/{id}/comments` - List comments for a post
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/posts", get(post_list_handler))
        .route("/posts/{id}", get(get_post_handler))
        .route("/posts/{id}/comments", get(comment_list_handler))
}

/// Routes requiring a valid session cookie.
///
/// # Endpoints
///
/// - `POST   /auth/logout`           - Clear the session cookie
/// - `GET    /auth/me`               - Current account profile
/// - `PUT    /auth/me/profile-image` - Upload a profile image
/// - `POST   /posts`                 - Publish a post
/// - `PATCH  /posts/{id}`            - Edit a post (author only)
/// - `DELETE /posts/{id}`            - Delete a post (author only)
/// - `PUT    /posts/{id}/image`      - Replace a post image (author only)
/// - `POST   /posts/{id}/comments`   - Comment on a post
/// - `POST   /posts/{id}/like`       - Increment the like counter
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/me/profile-image", put(profile_image_handler))
        .route("/posts", post(create_post_handler))
        .route(
            "/posts/{id}",
            axum::routing::patch(update_post_handler).delete(delete_post_handler),
        )
        .route("/posts/{id}/image", put(update_post_image_handler))
        .route("/posts/{id}/comments", post(create_comment_handler))
        .route("/posts/{id}/like", post(like_handler))
}
