//! Account registration, login, and session token service.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Service for account management and stateless session tokens.
///
/// Passwords are hashed with bcrypt. Sessions are self-contained signed
/// tokens (`base64(user_id:expiry).hex(hmac)`) so no session table is
/// needed; revocation happens by expiry only.
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    signing_secret: String,
    session_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `user_repository` - account repository for DB operations
    /// - `signing_secret` - HMAC key for session tokens; rotating it
    ///   invalidates all outstanding sessions
    /// - `session_ttl_seconds` - session lifetime
    /// - `bcrypt_cost` - bcrypt work factor (12 in production, lower in tests)
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        signing_secret: String,
        session_ttl_seconds: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repository,
            signing_secret,
            session_ttl: Duration::seconds(session_ttl_seconds),
            bcrypt_cost,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or username is already
    /// registered. Returns [`AppError::Internal`] on hashing or database
    /// errors.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: &str,
        profile_image: Option<String>,
    ) -> Result<User, AppError> {
        if self
            .user_repository
            .email_or_username_taken(&email, &username)
            .await?
        {
            return Err(AppError::conflict(
                "User with that email or username already exists",
                json!({ "email": email, "username": username }),
            ));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost).map_err(|e| {
            AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
        })?;

        self.user_repository
            .create(NewUser {
                username,
                email,
                password_hash,
                profile_image,
            })
            .await
    }

    /// Verifies credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown email or wrong
    /// password; the two cases are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let invalid =
            || AppError::unauthorized("Invalid credentials", json!({ "reason": "bad email or password" }));

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        let verified = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            AppError::internal("Failed to verify password", json!({ "reason": e.to_string() }))
        })?;

        if !verified {
            return Err(invalid());
        }

        let token = self.issue_session(user.id);
        Ok((user, token))
    }

    /// Issues a signed session token for a user id.
    pub fn issue_session(&self, user_id: i64) -> String {
        let expires = (Utc::now() + self.session_ttl).timestamp();
        let payload = format!("{user_id}:{expires}");
        let signature = self.sign(&payload);

        format!("{}.{}", URL_SAFE_NO_PAD.encode(payload.as_bytes()), signature)
    }

    /// Verifies a session token and returns the user id it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, the
    /// signature does not match, or the session has expired.
    pub fn verify_session(&self, token: &str) -> Result<i64, AppError> {
        let invalid = || {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired session" }),
            )
        };

        let (encoded, signature) = token.split_once('.').ok_or_else(invalid)?;

        let payload_bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| invalid())?;
        let payload = String::from_utf8(payload_bytes).map_err(|_| invalid())?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        let expected = hex::decode(signature).map_err(|_| invalid())?;
        mac.verify_slice(&expected).map_err(|_| invalid())?;

        let (user_id, expires) = payload.split_once(':').ok_or_else(invalid)?;
        let user_id: i64 = user_id.parse().map_err(|_| invalid())?;
        let expires: i64 = expires.parse().map_err(|_| invalid())?;

        if Utc::now().timestamp() >= expires {
            return Err(invalid());
        }

        Ok(user_id)
    }

    /// Resolves a session token to the account it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or the
    /// account no longer exists.
    pub async fn current_user(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.verify_session(token)?;
        self.get_user(user_id).await
    }

    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the account no longer exists;
    /// callers hold a verified session, so a missing row means the account
    /// was deleted after the token was issued.
    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Account no longer exists" }),
                )
            })
    }

    /// Replaces the stored profile image filename for an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the account no longer exists.
    pub async fn set_profile_image(
        &self,
        user_id: i64,
        filename: String,
    ) -> Result<User, AppError> {
        self.user_repository
            .set_profile_image(user_id, filename)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Account no longer exists" }),
                )
            })
    }

    /// Signs a payload with HMAC-SHA256, returning lowercase hex.
    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
