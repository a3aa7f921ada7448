//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage
//! - [`PgPostRepository`] - Posts and engagement counters
//! - [`PgCommentRepository`] - Comments

pub mod pg_comment_repository;
pub mod pg_post_repository;
pub mod pg_user_repository;

pub use pg_comment_repository::PgCommentRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_user_repository::PgUserRepository;
