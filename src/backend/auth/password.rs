//! Password hashing
//!
//! bcrypt with a per-password salt. Hashing and verification are CPU-bound,
//! so both run on the blocking thread pool rather than an async worker.

use thiserror::Error;
use tokio::sync::OnceCell;

/// bcrypt cost factor used for new hashes
pub const PASSWORD_HASH_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Derive a salted hash of `password`
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
        .await??;
    Ok(hash)
}

/// Check `password` against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

/// Hash checked when no account matches, so both login failures cost one bcrypt verify
static UNKNOWN_ACCOUNT_HASH: OnceCell<String> = OnceCell::const_new();

/// Spend a bcrypt verification on a login for an unknown email
pub async fn verify_unknown_account(password: String) -> Result<(), PasswordError> {
    let hash = UNKNOWN_ACCOUNT_HASH
        .get_or_try_init(|| hash_password("unknown-account".to_string()))
        .await?;
    verify_password(password, hash.clone()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_verifies_and_differs_from_plaintext() {
        let hash = hash_password("Secret123".to_string()).await.unwrap();
        assert_ne!(hash, "Secret123");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("Secret123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let first = hash_password("Secret123".to_string()).await.unwrap();
        let second = hash_password("Secret123".to_string()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("Secret123".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(PasswordError::Bcrypt(_))));
    }

    #[tokio::test]
    async fn test_unknown_account_verify_uses_real_hash() {
        verify_unknown_account("Secret123".to_string()).await.unwrap();
        let hash = UNKNOWN_ACCOUNT_HASH.get().expect("hash initialised on first use");
        assert!(hash.contains(&format!("${PASSWORD_HASH_COST}$")));

        verify_unknown_account("unknown-account".to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn test_cost_factor() {
        let hash = hash_password("Secret123".to_string()).await.unwrap();
        assert!(hash.contains(&format!("${PASSWORD_HASH_COST}$")));
    }
}
