pub mod auth;
pub mod comment;
pub mod health;
pub mod like;
pub mod pagination;
pub mod post;

pub use auth::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};
pub use comment::{CommentRequest, CommentResponse};
pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use like::LikeResponse;
pub use pagination::{PaginationParams, PostQueryParams};
pub use post::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};
