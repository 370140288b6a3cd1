/**
 * Current Account Handler
 *
 * GET /api/auth/me
 *
 * Unlike the landing page gate, this endpoint verifies the session token's
 * signature and expiry before answering.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::handlers::types::AccountResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::SessionUser;

/// Return the account behind the current session
///
/// # Errors
///
/// * `401 Unauthorized` - No valid session, or the account no longer exists
/// * `500 Internal Server Error` - Store failure or timeout
pub async fn me(
    State(accounts): State<Accounts>,
    SessionUser(claims): SessionUser,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = accounts.find_by_id(claims.id).await?.ok_or_else(|| {
        tracing::warn!("Session for missing account: {}", claims.id);
        ApiError::Unauthenticated
    })?;

    Ok(Json(account.into()))
}
