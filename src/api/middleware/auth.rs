//! Session cookie authentication middleware for the API.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Name of the session cookie set on login.
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user attached to the request extensions by [`layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

/// Authenticates requests using the signed session cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `session` cookie from the request
/// 2. Verify its HMAC signature and expiry via
///    [`crate::application::services::AuthService`]
/// 3. Insert [`CurrentUser`] into request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The cookie is missing
/// - The token is malformed or its signature does not match
/// - The session has expired
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/posts", post(create_post_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token_from_headers(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "session cookie is missing"}),
        )
    })?;

    let user_id = st.auth_service.verify_session(&token)?;

    req.extensions_mut().insert(CurrentUser { id: user_id });

    Ok(next.run(req).await)
}

/// Extracts the session token from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// `session` key-value pair; other cookies are ignored.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_session_cookie() {
        let headers = headers_with_cookie("session=abc.def");
        assert_eq!(
            session_token_from_headers(&headers),
            Some("abc.def".to_string())
        );
    }

    #[test]
    fn picks_session_among_multiple_cookies() {
        let headers = headers_with_cookie("theme=dark; session=tok; lang=en");
        assert_eq!(session_token_from_headers(&headers), Some("tok".to_string()));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(session_token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn other_cookies_only_yields_none() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(session_token_from_headers(&headers), None);
    }
}
