//! Repository trait for account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for account storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is already
    /// registered. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds an account by email, the login identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Replaces the stored profile image filename.
    ///
    /// Returns the updated account, or `None` if the account no longer
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_profile_image(
        &self,
        user_id: i64,
        filename: String,
    ) -> Result<Option<User>, AppError>;

    /// Returns true if an account already uses this email or username.
    ///
    /// Used for a friendly conflict message before hitting the unique
    /// constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn email_or_username_taken(&self, email: &str, username: &str)
    -> Result<bool, AppError>;
}
