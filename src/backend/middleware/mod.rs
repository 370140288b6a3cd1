//! Middleware Module
//!
//! - **`session_gate`** - Presence-only cookie check in front of the landing page
//! - **`auth`** - `SessionUser` extractor that verifies the session token
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use skinscan::backend::middleware::require_session_cookie;
//!
//! let router: Router = Router::new()
//!     .route("/", get(|| async { "landing" }))
//!     .route_layer(middleware::from_fn(require_session_cookie));
//! ```

pub mod auth;

pub mod session_gate;

pub use auth::SessionUser;
pub use session_gate::{require_session_cookie, LOGIN_PATH};
