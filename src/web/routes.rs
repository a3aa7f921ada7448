//! Browser page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    compose_page_handler, compose_submit_handler, index_handler, login_page_handler,
    my_posts_handler, post_detail_handler, register_page_handler,
};
use axum::{Router, routing::get};

/// Protected page routes requiring a session cookie.
///
/// Protected via [`crate::web::middleware::web_auth`], which redirects
/// unauthenticated browsers to `/login`.
///
/// # Endpoints
///
/// - `GET  /compose`  - Post composition form
/// - `POST /compose`  - Publish a post (multipart)
/// - `GET  /my-posts` - Posts authored by the current user
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/compose",
            get(compose_page_handler).post(compose_submit_handler),
        )
        .route("/my-posts", get(my_posts_handler))
}

/// Public page routes without authentication.
///
/// # Endpoints
///
/// - `GET /`           - Home page with recent posts
/// - `GET /posts/{id}` - Post detail with comments (records a view)
/// - `GET /login`      - Login page
/// - `GET /register`   - Registration page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/posts/{id}", get(post_detail_handler))
        .route("/login", get(login_page_handler))
        .route("/register", get(register_page_handler))
}
