//! Upload filename validation and generation.
//!
//! Uploaded images are stored under a sanitized name with a random suffix so
//! user-supplied filenames can never traverse directories or collide.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Random bytes appended to each stored filename before base64 encoding.
const SUFFIX_LENGTH_BYTES: usize = 6;

/// Maximum length kept from the original filename stem.
const MAX_STEM_LENGTH: usize = 40;

/// Image extensions accepted for upload.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extracts and validates the extension of an uploaded filename.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the filename has no extension or the
/// extension is not an accepted image type.
pub fn allowed_extension(filename: &str) -> Result<String, AppError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| {
            AppError::bad_request(
                "File has no extension",
                json!({ "filename": filename }),
            )
        })?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::bad_request(
            "Unsupported image type",
            json!({ "extension": ext, "allowed": ALLOWED_EXTENSIONS }),
        ));
    }

    Ok(ext)
}

/// Builds the on-disk filename for an upload: `{stem}-{suffix}.{ext}`.
///
/// The stem is lowercased and reduced to `[a-z0-9-_]`; the suffix is 8
/// characters of URL-safe base64 from the system RNG.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for missing or unsupported extensions.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn storage_filename(original: &str) -> Result<String, AppError> {
    let ext = allowed_extension(original)?;

    let stem: String = original
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(original)
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .take(MAX_STEM_LENGTH)
        .collect();

    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { "image" } else { stem };

    let mut buffer = [0u8; SUFFIX_LENGTH_BYTES];
    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");
    let suffix = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);

    Ok(format!("{stem}-{suffix}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allowed_extension_accepts_image_types() {
        assert_eq!(allowed_extension("cat.png").unwrap(), "png");
        assert_eq!(allowed_extension("photo.JPEG").unwrap(), "jpeg");
        assert_eq!(allowed_extension("anim.gif").unwrap(), "gif");
    }

    #[test]
    fn test_allowed_extension_rejects_other_types() {
        assert!(allowed_extension("script.exe").is_err());
        assert!(allowed_extension("doc.pdf").is_err());
        assert!(allowed_extension("noext").is_err());
        assert!(allowed_extension("trailing.").is_err());
    }

    #[test]
    fn test_storage_filename_shape() {
        let name = storage_filename("My Photo.PNG").unwrap();
        assert!(name.ends_with(".png"));
        assert!(name.starts_with("my-photo-"));
    }

    #[test]
    fn test_storage_filename_neutralizes_traversal() {
        let name = storage_filename("../../etc/passwd.png").unwrap();
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
    }

    #[test]
    fn test_storage_filename_empty_stem_falls_back() {
        let name = storage_filename("....png").unwrap();
        assert!(name.starts_with("image-"));
    }

    #[test]
    fn test_storage_filename_truncates_long_stems() {
        let long = format!("{}.png", "a".repeat(100));
        let name = storage_filename(&long).unwrap();
        // stem + '-' + 8 char suffix + ".png"
        assert!(name.len() <= MAX_STEM_LENGTH + 1 + 8 + 4);
    }

    #[test]
    fn test_storage_filename_is_unique() {
        let mut names = HashSet::new();
        for _ in 0..100 {
            names.insert(storage_filename("photo.jpg").unwrap());
        }
        assert_eq!(names.len(), 100);
    }
}
