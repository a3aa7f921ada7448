//! Cookie-based authentication middleware for browser pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::auth::{CurrentUser, session_token_from_headers};
use crate::state::AppState;

/// Authenticates page requests using the signed session cookie.
///
/// Unlike the API auth middleware which returns `401 Unauthorized`, this
/// middleware redirects to `/login` for a better experience in a browser
/// context. On success it inserts [`CurrentUser`] into the request
/// extensions, same as the API layer.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = session_token_from_headers(req.headers());

    match token {
        Some(token) => match st.auth_service.verify_session(&token) {
            Ok(user_id) => {
                req.extensions_mut().insert(CurrentUser { id: user_id });
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}
