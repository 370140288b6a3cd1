//! Server Module
//!
//! Configuration, shared state and startup for the Axum server.
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Store selection and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
