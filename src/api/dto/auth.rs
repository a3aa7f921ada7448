//! DTOs for registration, login, and account responses.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::User;

/// Compiled regex for username validation.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Request to register a new account.
///
/// Field limits mirror the web registration form.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username can only contain letters, digits, hyphens, and underscores"
    ))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    /// Must equal `password`.
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm: String,
}

/// Request to log in with email and password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            profile_image: user.profile_image,
            created_at: user.created_at,
        }
    }
}

/// Response to a successful login.
///
/// The token is also set as the `session` cookie; it is returned in the body
/// for non-browser clients.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserResponse,
}
