//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`view_event`] - View tracking event model
//! - [`view_worker`] - Asynchronous view processing worker
//!
//! # View Processing Flow
//!
//! 1. A post detail handler receives a request
//! 2. [`view_event::ViewEvent`] is sent to the async channel
//! 3. [`view_worker::run_view_worker`] processes events with retry logic
//! 4. The counter is persisted via [`repositories::PostRepository`]

pub mod entities;
pub mod repositories;
pub mod view_event;
pub mod view_worker;
