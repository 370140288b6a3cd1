//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/registerapi - Account registration
//! - **`login`** - POST /api/auth/loginapi - Credential check, sets the session cookie
//! - **`me`** - GET /api/auth/me - Account behind the current session
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use skinscan::backend::auth::handlers::{login, me, register};
//! use skinscan::backend::server::state::AppState;
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/api/auth/registerapi", post(register))
//!     .route("/api/auth/loginapi", post(login))
//!     .route("/api/auth/me", get(me))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current account handler
pub mod me;

pub use types::{AccountResponse, LoginRequest, MessageResponse, RegisterRequest};

pub use login::login;
pub use me::me;
pub use register::register;
