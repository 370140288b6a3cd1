/**
 * Account Model and Store
 *
 * This module defines the account record, the `AccountStore` trait that
 * persists it, and `Accounts`, the handle handlers use to reach the store.
 *
 * # Implementations
 *
 * - `PgAccountStore` - PostgreSQL via sqlx (production)
 * - `MemoryAccountStore` - in-process map (tests, database-less runs)
 *
 * # Invariants
 *
 * - Exactly one account per email. A second `create` with the same email
 *   fails with `StoreError::Duplicate`, including when two registrations
 *   race past the handler's lookup.
 * - `id` is assigned by the store and never changes.
 */

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Account record as persisted
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID, assigned at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique across accounts
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this email already exists
    #[error("an account with this email already exists")]
    Duplicate,

    #[error("account store did not answer within {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for account records
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Persist a new account, enforcing email uniqueness
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;
}

/// Shared handle to the account store
///
/// Every call is bounded by `timeout`; a store that does not answer in time
/// yields `StoreError::Timeout`.
#[derive(Clone)]
pub struct Accounts {
    store: Arc<dyn AccountStore>,
    timeout: Duration,
}

impl Accounts {
    pub fn new(store: Arc<dyn AccountStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.bounded(self.store.find_by_email(email)).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        self.bounded(self.store.find_by_id(id)).await
    }

    pub async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        self.bounded(self.store.create(account)).await
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}
