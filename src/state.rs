//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, CommentService, EngagementService, PostService};
use crate::domain::view_event::ViewEvent;
use crate::infrastructure::storage::ImageStore;

/// Application state shared across handlers via axum's `State` extractor.
///
/// Services are constructed once at startup in [`crate::server::run`] (or in
/// test harnesses over in-memory repositories) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
    pub comment_service: Arc<CommentService>,
    pub engagement_service: Arc<EngagementService>,
    pub image_store: Arc<dyn ImageStore>,
    /// Sender half of the bounded view tracking queue.
    pub view_sender: mpsc::Sender<ViewEvent>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        post_service: Arc<PostService>,
        comment_service: Arc<CommentService>,
        engagement_service: Arc<EngagementService>,
        image_store: Arc<dyn ImageStore>,
        view_sender: mpsc::Sender<ViewEvent>,
    ) -> Self {
        Self {
            auth_service,
            post_service,
            comment_service,
            engagement_service,
            image_store,
            view_sender,
        }
    }

    /// Enqueues a view event without blocking the request.
    ///
    /// A full queue drops the event with a warning; view counts are
    /// best-effort.
    pub fn record_view(&self, post_id: i64) {
        if let Err(e) = self.view_sender.try_send(ViewEvent::new(post_id)) {
            tracing::warn!(post_id, error = %e, "view queue full, dropping event");
        }
    }
}
