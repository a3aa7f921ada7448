//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: DB, view queue (public)
//! - `/api/*`       - REST API (session cookie required for writes)
//! - `/`, `/posts/*`, `/login`, `/register`, `/compose`, `/my-posts`
//!                  - HTML pages (cookie session for authoring)
//! - `/static/*`    - Static assets (CSS, likes.js)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Session cookie (401 for API, redirect for pages)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let api_public = api::routes::public_routes().layer(rate_limit::layer());

    let api_router = Router::new().merge(api_protected).merge(api_public);

    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::secure_layer());

    let web_public = web::routes::public_routes().layer(rate_limit::layer());

    let web_router = Router::new().merge(web_protected).merge(web_public);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
