//! DTO for the like endpoint.

use serde::{Deserialize, Serialize};

/// Response body of `POST /api/posts/{id}/like`.
///
/// The shape is fixed: clients (including [`crate::client::like`]) read the
/// `likes` field and display it verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes: i64,
}
