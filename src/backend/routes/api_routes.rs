/**
 * API Routes
 *
 * ## Authentication
 * - `POST /api/auth/registerapi` - Account registration
 * - `POST /api/auth/loginapi` - Login, sets the `token` cookie
 * - `GET /api/auth/me` - Account behind the session (session required)
 *
 * ## Analysis
 * - `POST /api/analyze` - Classify an uploaded image (session required)
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::analysis::analyze;
use crate::backend::auth::{login, me, register};
use crate::backend::server::state::AppState;

/// Add the API routes to `router`
///
/// `max_upload_bytes` bounds the analyze body only; the JSON endpoints keep
/// axum's default limit.
pub fn configure_api_routes(router: Router<AppState>, max_upload_bytes: usize) -> Router<AppState> {
    router
        .route("/api/auth/registerapi", post(register))
        .route("/api/auth/loginapi", post(login))
        .route("/api/auth/me", get(me))
        .route(
            "/api/analyze",
            post(analyze).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}
