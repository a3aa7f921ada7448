//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// PostgreSQL repository for comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    author_name: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            post_id: row.post_id,
            author_id: row.author_id,
            author_name: row.author_name,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (post_id, author_id, text)
                VALUES ($1, $2, $3)
                RETURNING id, post_id, author_id, text, created_at
            )
            SELECT i.id, i.post_id, i.author_id, u.username AS author_name, i.text, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.author_id
            "#,
        )
        .bind(new_comment.post_id)
        .bind(new_comment.author_id)
        .bind(&new_comment.text)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.post_id, c.author_id, u.username AS author_name, c.text, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_for_post(&self, post_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE post_id = $1",
        )
        .bind(post_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
