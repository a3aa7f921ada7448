//! Post composition page and form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::post::CreatePostRequest;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::infrastructure::storage::ImageKind;
use crate::state::AppState;

/// Template for the post composition form.
#[derive(Template, WebTemplate)]
#[template(path = "compose.html")]
struct ComposeTemplate {
    logged_in: bool,
}

/// Renders the post composition page.
///
/// # Endpoint
///
/// `GET /compose`
pub async fn compose_page_handler() -> impl IntoResponse {
    // Reachable only through web_auth, so the session is always present.
    ComposeTemplate { logged_in: true }
}

/// Publishes a post from the multipart composition form.
///
/// # Endpoint
///
/// `POST /compose`
///
/// # Form Fields
///
/// - `title` - post title
/// - `content` - post body
/// - `image` (optional) - header image; png, jpg, jpeg, or gif
///
/// An uploaded image is stored under the post image directory with a
/// randomized filename before the post row is written.
///
/// # Errors
///
/// Returns 400 Bad Request for missing fields or unsupported image
/// types.
pub async fn compose_submit_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut title = None;
    let mut content = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Malformed form data", json!({ "reason": e.to_string() }))
    })? {
        match field.name() {
            Some("title") => {
                title = Some(read_text(field).await?);
            }
            Some("content") => {
                content = Some(read_text(field).await?);
            }
            Some("image") => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request("Malformed form data", json!({ "reason": e.to_string() }))
                })?;

                // Browsers submit an empty file part when nothing was picked.
                if !original_name.is_empty() && !bytes.is_empty() {
                    let stored = state
                        .image_store
                        .save(ImageKind::Post, &original_name, bytes.to_vec())
                        .await?;
                    image = Some(stored);
                }
            }
            _ => {}
        }
    }

    let request = CreatePostRequest {
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
    };
    request.validate()?;

    let post = state
        .post_service
        .create_post(current.id, request.title, request.content, image)
        .await?;

    tracing::info!(post_id = post.id, author_id = current.id, "post published");

    Ok(Redirect::to(&format!("/posts/{}", post.id)))
}

/// Reads a text field, rejecting oversized or undecodable input.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(|e| {
        AppError::bad_request("Malformed form data", json!({ "reason": e.to_string() }))
    })
}
