/**
 * Login Handler
 *
 * POST /api/auth/loginapi
 *
 * # Authentication Process
 *
 * 1. Validate that email and password are present
 * 2. Look up the account by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a 24-hour session token and set it as the `token` cookie
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body, and both
 *   cost one bcrypt verification
 * - Passwords and tokens are never logged
 * - The cookie is HttpOnly, Secure and SameSite=Strict
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::{LoginRequest, MessageResponse};
use crate::backend::auth::password::{verify_password, verify_unknown_account};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Email or password missing
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store failure, store timeout, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/loginapi HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ann@x.com", "password": "Secret123" }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: token=eyJhbGciOi...; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=86400
///
/// { "message": "Login successful" }
/// ```
pub async fn login(
    State(accounts): State<Accounts>,
    State(sessions): State<SessionKeys>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let credentials = request.validate()?;

    tracing::info!("Login request for: {}", credentials.email);

    let Some(account) = accounts.find_by_email(&credentials.email).await? else {
        tracing::warn!("Login for unknown email: {}", credentials.email);
        verify_unknown_account(credentials.password).await?;
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(credentials.password, account.password_hash.clone()).await? {
        tracing::warn!("Invalid password for: {}", account.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = sessions.issue(account.id, &account.email)?;
    let cookie = session_cookie(&token).map_err(ApiError::internal)?;

    tracing::info!("Logged in: {} ({})", account.id, account.email);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(MessageResponse::new("Login successful")),
    ))
}
