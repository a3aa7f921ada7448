//! Registration page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the registration page.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    logged_in: bool,
}

/// Renders the registration page.
///
/// # Endpoint
///
/// `GET /register`
///
/// The form submits to `POST /api/auth/register` via JavaScript.
pub async fn register_page_handler() -> impl IntoResponse {
    RegisterTemplate { logged_in: false }
}
