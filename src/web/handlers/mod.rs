//! HTML page handlers rendered with Askama templates.

mod compose;
mod index;
mod login;
mod my_posts;
mod post_detail;
mod register;

pub use compose::{compose_page_handler, compose_submit_handler};
pub use index::index_handler;
pub use login::login_page_handler;
pub use my_posts::my_posts_handler;
pub use post_detail::post_detail_handler;
pub use register::register_page_handler;

use axum::http::HeaderMap;

use crate::api::middleware::auth::session_token_from_headers;
use crate::state::AppState;

/// Whether the request carries a valid session cookie.
///
/// Public pages use this for nav rendering only; protected pages go
/// through [`crate::web::middleware::web_auth`] instead.
pub(crate) fn logged_in(state: &AppState, headers: &HeaderMap) -> bool {
    session_token_from_headers(headers)
        .map(|token| state.auth_service.verify_session(&token).is_ok())
        .unwrap_or(false)
}
