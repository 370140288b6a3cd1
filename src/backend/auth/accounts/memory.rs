/**
 * In-memory Account Store
 *
 * Accounts kept in a map keyed by email. Used by the test suite and when the
 * server runs without `DATABASE_URL`; nothing survives a restart.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Account, AccountStore, NewAccount, StoreError};

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|account| account.id == id).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        // Check and insert under one write lock so concurrent creates can't both win
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(StoreError::Duplicate);
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            created_at: Utc::now(),
        };
        accounts.insert(account.email.clone(), account.clone());

        Ok(account)
    }
}
