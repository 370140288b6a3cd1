//! SkinScan - Main Library
//!
//! SkinScan is a small web backend that gates a skin-lesion analysis page
//! behind an account login. Accounts live in PostgreSQL, sessions are signed
//! JWTs carried in an HTTP-only cookie, and the analysis itself is delegated
//! to an external inference service over HTTP.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that describe the analysis domain
//!   - Lesion categories and their display metadata
//!   - Prediction payloads exchanged with the inference service
//!   - Error types
//!
//! - **`backend`** - Axum server
//!   - Registration, login and session handling
//!   - Account persistence (Postgres or in-memory)
//!   - Image analysis proxy
//!
//! # Usage
//!
//! ```rust,no_run
//! use skinscan::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Analysis domain types
pub mod shared;

/// Backend server-side code
pub mod backend;
