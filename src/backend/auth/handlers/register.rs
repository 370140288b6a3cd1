/**
 * Registration Handler
 *
 * POST /api/auth/registerapi
 *
 * # Registration Process
 *
 * 1. Validate that every field is present and the passwords match
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the account
 *
 * No session is issued; the user logs in separately.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::accounts::{Accounts, NewAccount};
use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::error::{conversion::EMAIL_TAKEN_MESSAGE, ApiError};

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - A field is missing or empty, or the passwords differ
/// * `409 Conflict` - The email is already registered
/// * `500 Internal Server Error` - Store failure, store timeout or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/registerapi HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ann",
///   "email": "ann@x.com",
///   "password": "Secret123",
///   "confirmPassword": "Secret123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully" }
/// ```
pub async fn register(
    State(accounts): State<Accounts>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload?;
    let registration = request.validate()?;

    tracing::info!("Registration request for email: {}", registration.email);

    if accounts.find_by_email(&registration.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", registration.email);
        return Err(ApiError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    let password_hash = hash_password(registration.password).await?;

    // A concurrent registration can still win between the lookup and here;
    // the store reports it as a duplicate
    let account = accounts
        .create(NewAccount {
            name: registration.name,
            email: registration.email,
            password_hash,
        })
        .await?;

    tracing::info!("Account created: {} ({})", account.id, account.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}
