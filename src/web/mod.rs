//! Web layer for browser-based UI.
//!
//! Provides HTML pages for reading, publishing, and managing posts.
//! Uses Askama templates for server-side rendering; engagement actions
//! (likes, comments, auth forms) call the JSON API from `static/js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Web-specific middleware (cookie auth with redirect)
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
