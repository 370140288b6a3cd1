//! Authentication Module
//!
//! Account registration, credential verification and session issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts/       - Account model, store trait, Postgres and memory stores
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuance and verification
//! ├── cookie.rs       - Session cookie building and parsing
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password, confirmation → account created (201)
//! 2. **Login**: email, password → credentials verified → `token` cookie set (200)
//! 3. **Me**: `token` cookie → token verified → account info
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Sessions are stateless HS256 JWTs that expire after 24 hours
//! - Invalid credentials return 401 with one message for both failure causes

/// Account model and persistence
pub mod accounts;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie helpers
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use accounts::{Account, AccountStore, Accounts, StoreError};
pub use handlers::{login, me, register};
pub use sessions::{Claims, SessionKeys};
