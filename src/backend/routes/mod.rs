//! Route Configuration Module
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - JSON and upload endpoints under `/api`
//! - **`page_routes`** - HTML pages and static assets
//!
//! # Routes
//!
//! | Method | Path                    | Access          |
//! |--------|-------------------------|-----------------|
//! | POST   | `/api/auth/registerapi` | public          |
//! | POST   | `/api/auth/loginapi`    | public          |
//! | GET    | `/api/auth/me`          | verified token  |
//! | POST   | `/api/analyze`          | verified token  |
//! | GET    | `/`                     | cookie present  |
//! | GET    | `/login`, `/register`   | public          |
//! | GET    | `/static/{path}`        | public          |

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// HTML page routes
pub mod page_routes;

pub use router::create_router;
