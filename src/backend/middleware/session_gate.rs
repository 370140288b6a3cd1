/**
 * Session Gate
 *
 * Guards the landing page: a request without a `token` cookie is sent to
 * `/login`. The check is presence only. An expired or forged cookie passes
 * the gate; resources behind it verify the token themselves through
 * `SessionUser`.
 */

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::cookie::read_session_cookie;

pub const LOGIN_PATH: &str = "/login";

pub async fn require_session_cookie(request: Request, next: Next) -> Response {
    if read_session_cookie(request.headers()).is_none() {
        tracing::debug!("No session cookie, redirecting {} to login", request.uri().path());
        return Redirect::temporary(LOGIN_PATH).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{
            header::{COOKIE, LOCATION},
            Request as HttpRequest, StatusCode,
        },
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "landing" }))
            .route_layer(middleware::from_fn(require_session_cookie))
    }

    fn request(cookie: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_redirects_without_cookie() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_other_cookies_do_not_count() {
        let response = app().oneshot(request(Some("theme=dark"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_passes_with_any_token() {
        let response = app()
            .oneshot(request(Some("theme=dark; token=whatever")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
