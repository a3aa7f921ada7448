//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, worker spawning, and
//! Axum server lifecycle.

use crate::application::services::{AuthService, CommentService, EngagementService, PostService};
use crate::config::Config;
use crate::domain::view_worker::run_view_worker;
use crate::infrastructure::persistence::{
    PgCommentRepository, PgPostRepository, PgUserRepository,
};
use crate::infrastructure::storage::LocalImageStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Image storage directories
/// - Background view worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let post_repository = Arc::new(PgPostRepository::new(pool.clone()));
    let comment_repository = Arc::new(PgCommentRepository::new(pool.clone()));

    let (view_tx, view_rx) = mpsc::channel(config.view_queue_capacity);
    tokio::spawn(run_view_worker(view_rx, post_repository.clone()));
    tracing::info!("View worker started");

    let image_store = Arc::new(LocalImageStore::new(&config.upload_dir).await?);

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.session_signing_secret.clone(),
        config.session_ttl_seconds,
        config.bcrypt_cost,
    ));
    let post_service = Arc::new(PostService::new(post_repository.clone()));
    let comment_service = Arc::new(CommentService::new(
        comment_repository,
        post_repository.clone(),
    ));
    let engagement_service = Arc::new(EngagementService::new(post_repository));

    let state = AppState::new(
        auth_service,
        post_service,
        comment_service,
        engagement_service,
        image_store,
        view_tx,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
