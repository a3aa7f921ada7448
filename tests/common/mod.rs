//! Shared test harness: in-memory repositories and state construction.
//!
//! Handler tests run against the real services and handlers with the
//! storage swapped for in-memory fakes, so no database is needed.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;

use blogr::application::services::{AuthService, CommentService, EngagementService, PostService};
use blogr::domain::entities::{Comment, NewComment, NewPost, NewUser, Post, PostPatch, User};
use blogr::domain::repositories::{CommentRepository, PostFilter, PostRepository, UserRepository};
use blogr::domain::view_event::ViewEvent;
use blogr::error::AppError;
use blogr::infrastructure::storage::{ImageKind, ImageStore};
use blogr::state::AppState;

/// bcrypt cost for test fixtures; the minimum keeps hashing fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub const TEST_SESSION_TTL: i64 = 3600;

// ─── In-memory repositories ──────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn username_of(&self, id: i64) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile_image: new_user.profile_image,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn set_profile_image(
        &self,
        user_id: i64,
        filename: String,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == user_id).map(|u| {
            u.profile_image = Some(filename);
            u.clone()
        }))
    }

    async fn email_or_username_taken(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email || u.username == username))
    }
}

pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            users,
        }
    }
}

fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
    if let Some(author_id) = filter.author_id {
        if post.author_id != author_id {
            return false;
        }
    }
    if let Some(query) = &filter.query {
        let q = query.to_lowercase();
        if !post.title.to_lowercase().contains(&q) && !post.content.to_lowercase().contains(&q) {
            return false;
        }
    }
    true
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let author_name = self
            .users
            .username_of(new_post.author_id)
            .unwrap_or_else(|| "unknown".to_string());

        let mut posts = self.posts.lock().unwrap();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            author_id: new_post.author_id,
            author_name,
            title: new_post.title,
            content: new_post.content,
            image: new_post.image,
            likes: 0,
            views: 0,
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: PostFilter,
    ) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.lock().unwrap();
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| matches_filter(p, &filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: PostFilter) -> Result<i64, AppError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| matches_filter(p, &filter))
            .count() as i64)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            AppError::not_found("Post not found", serde_json::json!({ "id": id }))
        })?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(image) = patch.image {
            post.image = Some(image);
        }

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<i64>, AppError> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts.iter_mut().find(|p| p.id == id).map(|p| {
            p.likes += 1;
            p.likes
        }))
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| {
                p.views += 1;
            })
            .is_some())
    }
}

pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryCommentRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            users,
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let author_name = self
            .users
            .username_of(new_comment.author_id)
            .unwrap_or_else(|| "unknown".to_string());

        let mut comments = self.comments.lock().unwrap();
        let comment = Comment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            post_id: new_comment.post_id,
            author_id: new_comment.author_id,
            author_name,
            text: new_comment.text,
            created_at: Utc::now(),
        };
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let comments = self.comments.lock().unwrap();
        let mut matching: Vec<Comment> = comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matching)
    }

    async fn count_for_post(&self, post_id: i64) -> Result<i64, AppError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .count() as i64)
    }
}

/// Image store that records saves without touching the filesystem.
#[derive(Default)]
pub struct RecordingImageStore {
    pub saved: Mutex<Vec<(ImageKind, String)>>,
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn save(
        &self,
        kind: ImageKind,
        original_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let stored = format!("stored-{original_name}");
        self.saved.lock().unwrap().push((kind, stored.clone()));
        Ok(stored)
    }
}

// ─── State construction ──────────────────────────────────────────────────────

/// Everything a handler test needs: the state plus direct repository
/// handles for seeding and inspection.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub posts: Arc<InMemoryPostRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub images: Arc<RecordingImageStore>,
    pub view_rx: mpsc::Receiver<ViewEvent>,
}

pub fn create_test_context() -> TestContext {
    let users = Arc::new(InMemoryUserRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new(users.clone()));
    let comments = Arc::new(InMemoryCommentRepository::new(users.clone()));
    let images = Arc::new(RecordingImageStore::default());

    let (view_tx, view_rx) = mpsc::channel(100);

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        TEST_SIGNING_SECRET.to_string(),
        TEST_SESSION_TTL,
        TEST_BCRYPT_COST,
    ));
    let post_service = Arc::new(PostService::new(posts.clone()));
    let comment_service = Arc::new(CommentService::new(comments.clone(), posts.clone()));
    let engagement_service = Arc::new(EngagementService::new(posts.clone()));

    let state = AppState::new(
        auth_service,
        post_service,
        comment_service,
        engagement_service,
        images.clone(),
        view_tx,
    );

    TestContext {
        state,
        users,
        posts,
        comments,
        images,
        view_rx,
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub async fn seed_user(ctx: &TestContext, username: &str, email: &str, password: &str) -> User {
    ctx.users
        .create(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: bcrypt::hash(password, TEST_BCRYPT_COST).unwrap(),
            profile_image: None,
        })
        .await
        .unwrap()
}

pub async fn seed_post(ctx: &TestContext, author_id: i64, title: &str, content: &str) -> Post {
    ctx.posts
        .create(NewPost {
            author_id,
            title: title.to_string(),
            content: content.to_string(),
            image: None,
        })
        .await
        .unwrap()
}

/// `Cookie` header value carrying a valid session for `user_id`.
pub fn session_cookie(ctx: &TestContext, user_id: i64) -> String {
    format!("session={}", ctx.state.auth_service.issue_session(user_id))
}
