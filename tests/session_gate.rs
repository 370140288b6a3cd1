//! Landing page gate and static page tests

mod common;

use axum::http::StatusCode;

use common::{cookie_header, signed_in, spawn_app};

#[tokio::test]
async fn test_landing_without_cookie_redirects_to_login() {
    let app = spawn_app();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_landing_with_empty_cookie_redirects() {
    let app = spawn_app();
    let (name, value) = cookie_header("");

    let response = app.server.get("/").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_landing_with_session_cookie() {
    let app = spawn_app();
    let token = signed_in(&app.server).await;
    let (name, value) = cookie_header(&token);

    let response = app.server.get("/").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/api/analyze"));
}

#[tokio::test]
async fn test_gate_checks_presence_only() {
    let app = spawn_app();
    let (name, value) = cookie_header("anything-at-all");

    let response = app.server.get("/").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_and_register_pages_are_public() {
    let app = spawn_app();

    let login = app.server.get("/login").await;
    assert_eq!(login.status_code(), StatusCode::OK);
    assert!(login.text().contains("/api/auth/loginapi"));

    let register = app.server.get("/register").await;
    assert_eq!(register.status_code(), StatusCode::OK);
    assert!(register.text().contains("/api/auth/registerapi"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = spawn_app();

    let response = app.server.get("/nowhere").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_landing_page_not_exposed_as_static_asset() {
    let app = spawn_app();

    for path in ["/static/index.html", "/static/../index.html", "/static/login.html"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{path}");
        assert!(!response.text().contains("/api/analyze"), "{path}");
    }
}

#[tokio::test]
async fn test_static_assets_are_public() {
    let app = spawn_app();

    let response = app.server.get("/static/skinscan.js").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("postJson"));
}
