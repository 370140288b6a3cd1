//! Common test utilities
//!
//! Builds the full router over an in-memory account store so integration
//! tests exercise real routing, extractors and layers without Postgres.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header::COOKIE, HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use serde_json::json;
use skinscan::backend::auth::accounts::{
    Account, AccountStore, MemoryAccountStore, NewAccount, StoreError,
};
use skinscan::backend::auth::SessionKeys;
use skinscan::backend::routes::create_router;
use skinscan::backend::server::{AppState, ServerConfig};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Nothing listens here; tests that never reach the inference service use it
pub const UNUSED_INFERENCE_URL: &str = "http://127.0.0.1:9";

/// Memory store that counts every call it receives
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryAccountStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountStore for CountingStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.touch();
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        self.touch();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        self.touch();
        self.inner.create(account).await
    }
}

/// Store whose every call times out
pub struct FailingStore;

#[async_trait]
impl AccountStore for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }

    async fn create(&self, _account: NewAccount) -> Result<Account, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<CountingStore>,
    pub sessions: SessionKeys,
}

/// Config for tests; later entries in `extra` win
pub fn test_config(inference_url: &str, extra: &[(&str, &str)]) -> ServerConfig {
    let mut pairs = vec![
        ("JWT_SECRET".to_string(), TEST_SECRET.to_string()),
        ("INFERENCE_URL".to_string(), inference_url.to_string()),
        ("INFERENCE_TIMEOUT_SECS".to_string(), "5".to_string()),
    ];
    pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    ServerConfig::from_lookup(|key| {
        pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("test config should be valid")
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(test_config(UNUSED_INFERENCE_URL, &[]))
}

pub fn spawn_app_with(config: ServerConfig) -> TestApp {
    let store = Arc::new(CountingStore::default());
    let (server, sessions) = server_with_store(store.clone(), &config);

    TestApp {
        server,
        store,
        sessions,
    }
}

/// Full router over any account store
pub fn server_with_store(store: Arc<dyn AccountStore>, config: &ServerConfig) -> (TestServer, SessionKeys) {
    let state = AppState::new(
        store,
        config.store_timeout,
        config.jwt_secret.as_bytes(),
        &config.inference_url,
        config.inference_timeout,
    )
    .expect("inference client should build");
    let sessions = state.sessions.clone();

    let server = TestServer::new(create_router(state, config)).expect("test server should start");
    (server, sessions)
}

pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/registerapi")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
            "confirmPassword": password,
        }))
        .await
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/loginapi")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Token carried by a login response's `Set-Cookie` header
pub fn session_token(response: &TestResponse) -> String {
    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().expect("set-cookie should be ascii");
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.strip_prefix("token=")
        .expect("set-cookie should carry the token")
        .to_string()
}

/// Register and log in as Ann, returning the session token
pub async fn signed_in(server: &TestServer) -> String {
    register(server, "Ann", "ann@x.com", "Secret123").await;
    let response = login(server, "ann@x.com", "Secret123").await;
    session_token(&response)
}

pub fn cookie_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(&format!("token={token}")).expect("valid cookie header"),
    )
}
