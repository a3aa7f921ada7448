//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod comment_repository;
pub mod post_repository;
pub mod user_repository;

pub use comment_repository::CommentRepository;
pub use post_repository::{PostFilter, PostRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
