//! Background worker persisting view events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::PostRepository;
use crate::domain::view_event::ViewEvent;

const MAX_ATTEMPTS: usize = 3;

/// Drains the view event channel and applies counter increments.
///
/// Each increment is retried with jittered exponential backoff before the
/// event is dropped. View counts are best-effort: a lost increment is logged,
/// never surfaced to the original request.
///
/// Runs until the sender side of the channel is closed (server shutdown).
pub async fn run_view_worker(
    mut rx: mpsc::Receiver<ViewEvent>,
    post_repository: Arc<dyn PostRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        let repo = post_repository.clone();
        let result = Retry::spawn(strategy, || {
            let repo = repo.clone();
            async move { repo.increment_views(event.post_id).await }
        })
        .await;

        match result {
            Ok(true) => {}
            Ok(false) => {
                // Post deleted between the view and the write.
                tracing::debug!(post_id = event.post_id, "view event for missing post");
            }
            Err(e) => {
                tracing::warn!(post_id = event.post_id, error = %e, "dropping view event");
            }
        }
    }

    tracing::info!("view worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPostRepository;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_persists_events() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_increment_views()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(true));

        let (tx, rx) = mpsc::channel(10);
        let handle = tokio::spawn(run_view_worker(rx, Arc::new(mock_repo)));

        tx.send(ViewEvent::new(7)).await.unwrap();
        drop(tx);

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failures() {
        let mut mock_repo = MockPostRepository::new();
        let mut calls = 0;
        mock_repo
            .expect_increment_views()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(true)
                }
            });

        let (tx, rx) = mpsc::channel(10);
        let handle = tokio::spawn(run_view_worker(rx, Arc::new(mock_repo)));

        tx.send(ViewEvent::new(3)).await.unwrap();
        drop(tx);

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_drops_event_after_exhausted_retries() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_increment_views()
            .times(MAX_ATTEMPTS)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let (tx, rx) = mpsc::channel(10);
        let handle = tokio::spawn(run_view_worker(rx, Arc::new(mock_repo)));

        tx.send(ViewEvent::new(5)).await.unwrap();
        drop(tx);

        // Worker exits cleanly even when every attempt failed.
        handle.await.unwrap();
    }
}
