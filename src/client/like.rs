//! Like action client.
//!
//! Drives the `POST /api/posts/{id}/like` exchange for UI frontends: send
//! the request, read back the authoritative counter, update an optional
//! display slot, and play a feedback pulse. Failures collapse into a
//! single user-facing message while keeping a typed taxonomy for
//! programmatic callers.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Message shown to the user for any failed like, regardless of cause.
///
/// Intentionally generic: the user can do the same thing (log in or try
/// again) whether the request was rejected, lost, or garbled.
const LIKE_FAILED_MESSAGE: &str = "Please login to like or something went wrong.";

/// Why a like did not land.
#[derive(Debug, Error)]
pub enum LikeError {
    /// The request never completed; DNS failure, refused connection,
    /// dropped socket.
    #[error("like request could not be sent: {reason}")]
    Transport { reason: String },

    /// The server answered with a non-success status.
    #[error("like request rejected with status {status}")]
    Rejected { status: u16 },

    /// The server answered 2xx but the body did not carry a counter.
    #[error("like response was not understood")]
    MalformedResponse,
}

impl LikeError {
    /// The one generic message to surface to the user.
    ///
    /// All variants map to the same string; the taxonomy exists for
    /// logging and tests, not for differentiated user dialogs.
    pub fn user_message(&self) -> &'static str {
        LIKE_FAILED_MESSAGE
    }
}

/// Raw result of the HTTP exchange, before interpretation.
#[derive(Debug, Clone)]
pub struct LikeExchange {
    pub status: u16,
    pub body: String,
}

/// Transport seam for the like request.
///
/// Implementations map network-level failures to
/// [`LikeError::Transport`] and return every completed exchange as-is,
/// including rejections; classification happens in [`send_like`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeTransport: Send + Sync {
    /// Sends `POST /api/posts/{post_id}/like` with a JSON content type
    /// and an empty body.
    async fn post_like(&self, post_id: i64) -> Result<LikeExchange, LikeError>;
}

/// Slot showing the like counter, when the surrounding view has one.
#[cfg_attr(test, mockall::automock)]
pub trait LikeDisplay {
    /// Replaces the shown value with the server's authoritative count.
    fn set_likes(&mut self, likes: i64);
}

/// The control the user pressed; receives success feedback.
#[cfg_attr(test, mockall::automock)]
pub trait LikeControl {
    /// Plays a short press-feedback pulse.
    fn pulse(&mut self);
}

#[derive(Deserialize)]
struct LikeBody {
    likes: i64,
}

/// Sends a like for `post_id` and applies the outcome to the UI handles.
///
/// # Behavior
///
/// On success the authoritative count from the server is written to
/// `display` (when present, skipped silently otherwise) and `control`
/// pulses once. On any failure nothing is written and nothing pulses;
/// the caller surfaces [`LikeError::user_message`] exactly once.
///
/// The count always comes from the response, never from a local
/// increment, so a double-registered click cannot drift the display.
///
/// # Errors
///
/// - [`LikeError::Transport`] when the request never completed
/// - [`LikeError::Rejected`] for any non-2xx status
/// - [`LikeError::MalformedResponse`] when the 2xx body lacks a count
pub async fn send_like(
    transport: &dyn LikeTransport,
    post_id: i64,
    display: Option<&mut dyn LikeDisplay>,
    control: &mut dyn LikeControl,
) -> Result<i64, LikeError> {
    let exchange = transport.post_like(post_id).await?;

    if !(200..300).contains(&exchange.status) {
        return Err(LikeError::Rejected {
            status: exchange.status,
        });
    }

    let likes = serde_json::from_str::<LikeBody>(&exchange.body)
        .map(|body| body.likes)
        .map_err(|_| LikeError::MalformedResponse)?;

    if let Some(display) = display {
        display.set_likes(likes);
    }
    control.pulse();

    Ok(likes)
}

/// [`LikeTransport`] over HTTP, talking to a running service.
pub struct HttpLikeTransport {
    client: reqwest::Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpLikeTransport {
    /// Creates a transport for the service at `base_url`
    /// (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            session_token: None,
        }
    }

    /// Attaches a session token sent as the `session` cookie.
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

#[async_trait]
impl LikeTransport for HttpLikeTransport {
    async fn post_like(&self, post_id: i64) -> Result<LikeExchange, LikeError> {
        let url = format!("{}/api/posts/{}/like", self.base_url, post_id);

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = &self.session_token {
            request = request.header(reqwest::header::COOKIE, format!("session={token}"));
        }

        let response = request.send().await.map_err(|e| LikeError::Transport {
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| LikeError::Transport {
            reason: e.to_string(),
        })?;

        Ok(LikeExchange { status, body })
    }
}
