//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod comments;
pub mod health;
pub mod likes;
pub mod posts;

pub use auth::{
    login_handler, logout_handler, me_handler, profile_image_handler, register_handler,
};
pub use comments::{comment_list_handler, create_comment_handler};
pub use health::health_handler;
pub use likes::like_handler;
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, post_list_handler,
    update_post_handler, update_post_image_handler,
};

use axum::extract::Multipart;
use serde_json::json;

use crate::error::AppError;

/// Pulls the `image` file out of a multipart upload.
///
/// Returns the original filename and bytes. Empty file parts, which
/// browsers submit when no file was picked, are treated as absent.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed form data or when no
/// file was uploaded.
pub(crate) async fn read_image_upload(
    multipart: &mut Multipart,
) -> Result<(String, Vec<u8>), AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Malformed form data", json!({ "reason": e.to_string() }))
    })? {
        if field.name() == Some("image") {
            let original_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|e| {
                AppError::bad_request("Malformed form data", json!({ "reason": e.to_string() }))
            })?;

            if !original_name.is_empty() && !bytes.is_empty() {
                upload = Some((original_name, bytes.to_vec()));
            }
        }
    }

    upload.ok_or_else(|| AppError::bad_request("No image uploaded", json!({ "field": "image" })))
}
