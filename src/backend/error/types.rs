/**
 * API Error Types
 *
 * Every handler returns `Result<_, ApiError>`. Each variant maps to exactly
 * one HTTP status and one machine-readable code.
 *
 * | Variant              | Status | Code                  |
 * |----------------------|--------|-----------------------|
 * | `Validation`         | 400    | `validation_error`    |
 * | `Conflict`           | 409    | `conflict`            |
 * | `InvalidCredentials` | 401    | `invalid_credentials` |
 * | `Unauthenticated`    | 401    | `unauthenticated`     |
 * | `PayloadTooLarge`    | 413    | `payload_too_large`   |
 * | `Upstream`           | 502    | `upstream_error`      |
 * | `Internal`           | 500    | `internal_error`      |
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message shared by every credential failure, whichever field was wrong
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Message returned for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request data
    #[error("{0}")]
    Validation(String),

    /// The request collides with existing state (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Unknown email or wrong password
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// No valid session on a protected resource
    #[error("Authentication required")]
    Unauthenticated,

    /// Upload exceeds the configured body limit
    #[error("Image is too large")]
    PayloadTooLarge,

    /// The inference service failed or answered with something unusable
    #[error("{0}")]
    Upstream(String),

    /// Anything unexpected. The detail is for the logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Conflict(_) => "conflict",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthenticated => "unauthenticated",
            Self::PayloadTooLarge => "payload_too_large",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
