//! HTTP middleware for request processing and protection.
//!
//! Provides session authentication, rate limiting, and observability
//! middleware.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
