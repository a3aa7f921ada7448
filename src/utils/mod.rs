//! Utility functions shared across the application.
//!
//! - [`filename`] - Upload filename validation and generation

pub mod filename;
