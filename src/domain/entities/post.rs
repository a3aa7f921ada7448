//! Post entity representing a published blog entry.

use chrono::{DateTime, Utc};

/// A published post with engagement counters.
///
/// `author_name` is denormalized from the `users` join so list responses and
/// templates do not need a second lookup. `likes` and `views` are monotonic
/// counters incremented by the engagement endpoints and the view worker.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Returns true when `user_id` is the post's author.
    ///
    /// Mutating operations (update, delete) are restricted to the author.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}

/// Input data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update for an existing post.
///
/// `None` fields are left unchanged. `image: Some(name)` replaces the cover
/// image; clearing an image is not supported through the patch.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl PostPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image.is_none()
    }
}
