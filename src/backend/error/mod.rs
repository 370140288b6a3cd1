//! Backend Error Module
//!
//! Error type returned by every HTTP handler, and its conversion into a JSON
//! response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status/code mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Response Format
//!
//! ```json
//! { "message": "Invalid email or password", "code": "invalid_credentials" }
//! ```
//!
//! `message` is meant for people, `code` is stable and meant for clients.
//! Internal failures always answer with a generic message; the underlying
//! cause is logged, never returned.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
