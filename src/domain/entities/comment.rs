//! Comment entity attached to a post.

use chrono::{DateTime, Utc};

/// A comment left on a post.
///
/// `author_name` is denormalized from the `users` join for display.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
}
