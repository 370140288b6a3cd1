/**
 * Page Routes
 *
 * Static HTML pages served from `public/`:
 *
 * - `GET /` - Landing page, behind the session gate
 * - `GET /login` - Login form
 * - `GET /register` - Registration form
 * - `GET /static/{path}` - Assets under `public/static/`
 *
 * The pages themselves live outside `public/static/`, so the landing page is
 * only reachable through the gated `/` route.
 */

use std::path::Path;

use axum::{middleware, routing::get_service, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::middleware::require_session_cookie;
use crate::backend::server::state::AppState;

/// Directory holding the pages, relative to the working directory
pub const PUBLIC_DIR: &str = "public";

/// Subdirectory of `PUBLIC_DIR` exposed under `/static`
pub const ASSETS_DIR: &str = "static";

pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    let public = Path::new(PUBLIC_DIR);

    // route_layer only wraps routes registered before it, so the gate lives
    // on its own router.
    let gated = Router::new()
        .route("/", get_service(ServeFile::new(public.join("index.html"))))
        .route_layer(middleware::from_fn(require_session_cookie));

    router
        .merge(gated)
        .route("/login", get_service(ServeFile::new(public.join("login.html"))))
        .route("/register", get_service(ServeFile::new(public.join("register.html"))))
        .nest_service("/static", ServeDir::new(public.join(ASSETS_DIR)))
}
