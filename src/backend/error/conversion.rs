/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus `From` conversions from the errors of
 * each backend layer so handlers can use `?` throughout.
 *
 * Internal errors are logged here, once, with their full detail.
 */

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::analysis::client::InferenceError;
use crate::backend::auth::accounts::StoreError;
use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::SessionError;
use crate::backend::error::types::ApiError;

/// Message for a duplicate registration
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed with an internal error");
        }

        let status = self.status_code();
        let body = Json(json!({
            "message": self.message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ApiError::conflict(EMAIL_TAKEN_MESSAGE),
            other => ApiError::internal(other),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::internal(err)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::internal(err)
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::InvalidImage => ApiError::validation("Invalid image"),
            other => {
                tracing::warn!(error = %other, "Inference service call failed");
                ApiError::upstream("Analysis service unavailable")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(error = %err, "Rejected request body");
        ApiError::validation("Invalid request body")
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        tracing::debug!(error = %err, "Rejected multipart request");
        ApiError::validation("Expected a multipart/form-data upload")
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        tracing::debug!(error = %err, "Malformed multipart body");
        ApiError::validation("Malformed upload")
    }
}
