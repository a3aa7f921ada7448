//! Image storage trait.

use crate::error::AppError;
use async_trait::async_trait;

/// Category of an uploaded image, determining its storage subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Profile,
    Post,
}

impl ImageKind {
    /// Subdirectory name under the upload root.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Profile => "profiles",
            Self::Post => "posts",
        }
    }
}

/// Trait for persisting uploaded images.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalImageStore`] - local filesystem
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Validates and persists an uploaded image.
    ///
    /// Returns the stored filename, relative to the kind's subdirectory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unsupported file types and
    /// [`AppError::Internal`] on write failures.
    async fn save(
        &self,
        kind: ImageKind,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError>;
}
