/**
 * Application State
 *
 * `AppState` holds everything handlers share: the account store handle,
 * the session signing keys and the inference client. All three are cheap to
 * clone and immutable after startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take only the part they need,
 * e.g. `State(accounts): State<Accounts>`. `SessionUser` relies on the
 * `SessionKeys` one.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;

use crate::backend::analysis::client::{InferenceClient, InferenceError};
use crate::backend::auth::accounts::{AccountStore, Accounts};
use crate::backend::auth::sessions::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    /// Account store behind the configured timeout
    pub accounts: Accounts,

    /// HS256 keys derived from `JWT_SECRET`
    pub sessions: SessionKeys,

    /// Client for the external inference service
    pub inference: InferenceClient,
}

impl AppState {
    /// Assemble state around an already opened store
    pub fn new(
        store: Arc<dyn AccountStore>,
        store_timeout: Duration,
        jwt_secret: &[u8],
        inference_url: &str,
        inference_timeout: Duration,
    ) -> Result<Self, InferenceError> {
        Ok(Self {
            accounts: Accounts::new(store, store_timeout),
            sessions: SessionKeys::from_secret(jwt_secret),
            inference: InferenceClient::new(inference_url, inference_timeout)?,
        })
    }
}

impl FromRef<AppState> for Accounts {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for InferenceClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.inference.clone()
    }
}
