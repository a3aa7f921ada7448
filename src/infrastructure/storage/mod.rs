//! Image upload storage.

pub mod image_store;
pub mod local_image_store;

pub use image_store::{ImageKind, ImageStore};
pub use local_image_store::LocalImageStore;

#[cfg(test)]
pub use image_store::MockImageStore;
