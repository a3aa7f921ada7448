//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Accounts and session tokens
//! - [`services::post_service::PostService`] - Post CRUD with ownership checks
//! - [`services::comment_service::CommentService`] - Comments on posts
//! - [`services::engagement_service::EngagementService`] - Like counters

pub mod services;
