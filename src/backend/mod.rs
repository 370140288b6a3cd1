//! Backend Module
//!
//! All server-side code for SkinScan: an Axum HTTP server exposing the
//! registration and login API, a cookie-gated landing page, and an
//! authenticated image analysis endpoint.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly (API and page routes)
//! - **`auth`** - Accounts, password hashing, session tokens, handlers
//! - **`analysis`** - Inference service client and the analyze handler
//! - **`middleware`** - Session gate and the session extractor
//! - **`error`** - API error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── analysis/       - Image analysis proxy
//! ├── middleware/     - Request middleware and extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Requests share only immutable state: the account store handle, the
//! session signing keys and the inference client. Nothing is mutated across
//! requests apart from what the account store itself persists.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// Image analysis via the external inference service
pub mod analysis;

/// Middleware and extractors for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::create_app;
