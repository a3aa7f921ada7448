//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    logged_in: bool,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// The form submits to `POST /api/auth/login` via JavaScript; on success
/// the session cookie is set and the browser navigates home.
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate { logged_in: false }
}
