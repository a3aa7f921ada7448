//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`storage`] - Uploaded image storage

pub mod persistence;
pub mod storage;
