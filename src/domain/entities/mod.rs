//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns. Creation
//! inputs use separate `New*` structs, partial updates use `PostPatch`.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostPatch};
pub use user::{NewUser, User};
