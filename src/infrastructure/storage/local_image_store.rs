//! Local filesystem implementation of image storage.

use async_trait::async_trait;
use serde_json::json;
use std::path::PathBuf;

use crate::error::AppError;
use crate::infrastructure::storage::image_store::{ImageKind, ImageStore};
use crate::utils::filename::storage_filename;

/// Stores uploads under `{root}/profiles` and `{root}/posts`.
///
/// The root is served as static content, so stored filenames map directly to
/// public URLs.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Creates the store and its subdirectories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();

        for kind in [ImageKind::Profile, ImageKind::Post] {
            tokio::fs::create_dir_all(root.join(kind.dir()))
                .await
                .map_err(|e| {
                    AppError::internal(
                        "Failed to create upload directory",
                        json!({ "dir": kind.dir(), "reason": e.to_string() }),
                    )
                })?;
        }

        Ok(Self { root })
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(
        &self,
        kind: ImageKind,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let stored_name = storage_filename(original_name)?;
        let path = self.root.join(kind.dir()).join(&stored_name);

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            AppError::internal(
                "Failed to store image",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(stored_name)
    }
}
