//! View event model for asynchronous view tracking.

/// An in-memory record of a post detail view awaiting persistence.
///
/// Handlers enqueue these on a bounded channel instead of writing the counter
/// inline, keeping response latency independent of database load. Processed
/// by [`crate::domain::view_worker::run_view_worker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEvent {
    pub post_id: i64,
}

impl ViewEvent {
    pub fn new(post_id: i64) -> Self {
        Self { post_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_event_creation() {
        let event = ViewEvent::new(42);
        assert_eq!(event.post_id, 42);
    }
}
