//! Session cookie
//!
//! The session token travels in a cookie named `token`, scoped to the whole
//! site and unreadable from scripts.

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

use crate::backend::auth::sessions::SESSION_TTL_SECS;

pub const SESSION_COOKIE: &str = "token";

/// Build the `Set-Cookie` value carrying a session token
pub fn session_cookie(token: &str) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={SESSION_TTL_SECS}"
    ))
}

/// Value of the session cookie, if the request carries a non-empty one
pub fn read_session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}
