//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::domain::repositories::{PostFilter, PostRepository};
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for posts and their engagement counters.
///
/// All queries join `users` to denormalize the author name.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    author_name: String,
    title: String,
    content: String,
    image: Option<String>,
    likes: i64,
    views: i64,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            author_id: row.author_id,
            author_name: row.author_name,
            title: row.title,
            content: row.content,
            image: row.image,
            likes: row.likes,
            views: row.views,
            created_at: row.created_at,
        }
    }
}

const POST_COLUMNS: &str = "p.id, p.author_id, u.username AS author_name, p.title, p.content, \
                            p.image, p.likes, p.views, p.created_at";

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            WITH inserted AS (
                INSERT INTO posts (author_id, title, content, image)
                VALUES ($1, $2, $3, $4)
                RETURNING id, author_id, title, content, image, likes, views, created_at
            )
            SELECT i.id, i.author_id, u.username AS author_name, i.title, i.content,
                   i.image, i.likes, i.views, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.author_id
            "#,
        )
        .bind(new_post.author_id)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(&new_post.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: PostFilter,
    ) -> Result<Vec<Post>, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE TRUE"
        ));

        if let Some(author_id) = filter.author_id {
            builder.push(" AND p.author_id = ").push_bind(author_id);
        }
        if let Some(query) = &filter.query {
            let pattern = format!("%{query}%");
            builder
                .push(" AND (p.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR p.content ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        builder
            .push(" ORDER BY p.created_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: PostFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM posts p WHERE TRUE");

        if let Some(author_id) = filter.author_id {
            builder.push(" AND p.author_id = ").push_bind(author_id);
        }
        if let Some(query) = &filter.query {
            let pattern = format!("%{query}%");
            builder
                .push(" AND (p.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR p.content ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            WITH updated AS (
                UPDATE posts
                SET title   = COALESCE($2, title),
                    content = COALESCE($3, content),
                    image   = COALESCE($4, image)
                WHERE id = $1
                RETURNING id, author_id, title, content, image, likes, views, created_at
            )
            SELECT up.id, up.author_id, u.username AS author_name, up.title, up.content,
                   up.image, up.likes, up.views, up.created_at
            FROM updated up
            JOIN users u ON u.id = up.author_id
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(&patch.image)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<i64>, AppError> {
        let likes = sqlx::query_scalar::<_, i64>(
            "UPDATE posts SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(likes)
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
