//! Handlers for account registration, login, and session management.

use axum::{
    Extension, Json,
    extract::{Multipart, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};
use crate::api::middleware::auth::{CurrentUser, SESSION_COOKIE};
use crate::error::AppError;
use crate::infrastructure::storage::ImageKind;
use crate::state::AppState;

/// Builds the `Set-Cookie` value for a freshly issued session token.
fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Builds the `Set-Cookie` value that clears the session.
fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Registers a new account and logs it in.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "secret123",
///   "confirm": "secret123"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the session token and user profile; also sets the
/// `session` cookie for browser clients.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 409 Conflict if the
/// email or username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .register(payload.username, payload.email, &payload.password, None)
        .await?;

    let token = state.auth_service.issue_session(user.id);
    tracing::info!(user_id = user.id, "account registered");

    let cookie = session_cookie(&token);
    let body = SessionResponse {
        token,
        user: UserResponse::from(user),
    };

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(body),
    ))
}

/// Verifies credentials and starts a session.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// Returns 401 Unauthorized for an unknown email or wrong password; the
/// two cases are indistinguishable to the caller.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = user.id, "login");

    let cookie = session_cookie(&token);
    let body = SessionResponse {
        token,
        user: UserResponse::from(user),
    };

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(body)))
}

/// Ends the session by clearing the cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
///
/// Session tokens are self-contained, so the server only instructs the
/// browser to drop the cookie; the token itself lapses at its expiry.
pub async fn logout_handler() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        StatusCode::NO_CONTENT,
    )
}

/// Returns the profile of the authenticated user.
///
/// # Endpoint
///
/// `GET /api/auth/me`
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.auth_service.get_user(current.id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Uploads and sets the profile image of the authenticated user.
///
/// # Endpoint
///
/// `PUT /api/auth/me/profile-image`
///
/// # Form Fields
///
/// - `image` - png, jpg, jpeg, or gif
///
/// The file is stored under the profile image directory with a randomized
/// filename; the previous image, if any, is no longer referenced.
///
/// # Errors
///
/// Returns 400 Bad Request for a missing file or unsupported image type.
pub async fn profile_image_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, AppError> {
    let (original_name, bytes) = super::read_image_upload(&mut multipart).await?;

    let stored = state
        .image_store
        .save(ImageKind::Profile, &original_name, bytes)
        .await?;

    let user = state.auth_service.set_profile_image(current.id, stored).await?;
    tracing::info!(user_id = current.id, "profile image updated");

    Ok(Json(UserResponse::from(user)))
}
