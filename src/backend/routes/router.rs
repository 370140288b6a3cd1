/**
 * Router Configuration
 *
 * Combines API and page routes into the application router.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TimeoutLayer` - whole request bounded by `REQUEST_TIMEOUT_SECS`, 408 on expiry
 * 2. `TraceLayer` - one span per request
 */

use axum::{http::StatusCode, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Unknown paths fall through to a plain 404.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), config.max_upload_bytes);
    let router = configure_page_routes(router);

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
}
