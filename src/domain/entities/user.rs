//! User account entity.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` is a bcrypt hash and is never serialized into API
/// responses. `profile_image` is a filename relative to the profile upload
/// directory.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_image: Option<String>,
}
