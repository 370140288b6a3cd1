/**
 * Session Extractor
 *
 * `SessionUser` pulls the session token out of the `token` cookie and
 * verifies its signature and expiry. Handlers that take it as a parameter
 * are only reached with a valid session; anything else is rejected with
 * 401 `unauthenticated`.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::auth::cookie::read_session_cookie;
use crate::backend::auth::sessions::{Claims, SessionKeys};
use crate::backend::error::ApiError;

/// Verified session claims for the current request
#[derive(Clone, Debug)]
pub struct SessionUser(pub Claims);

impl<S> FromRequestParts<S> for SessionUser
where
    SessionKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = read_session_cookie(&parts.headers).ok_or_else(|| {
            tracing::debug!("No session cookie on protected request");
            ApiError::Unauthenticated
        })?;

        let claims = SessionKeys::from_ref(state).verify(token).map_err(|e| {
            tracing::warn!("Rejected session token: {}", e);
            ApiError::Unauthenticated
        })?;

        Ok(SessionUser(claims))
    }
}
