/**
 * Session Tokens
 *
 * Sessions are HS256 JWTs carrying the account id and email. They are not
 * stored server-side: a token is valid as long as its signature checks out
 * and it has not expired, 24 hours after issuance. There is no revocation.
 */

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifetime of a session token, in seconds
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub id: Uuid,
    /// Account email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("system clock is before the Unix epoch")]
    Clock,

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Signing and verification keys for session tokens
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }

    /// Issue a token for an account, valid from now
    pub fn issue(&self, id: Uuid, email: &str) -> Result<String, SessionError> {
        self.issue_at(id, email, Utc::now())
    }

    /// Issue a token as if it were `now`
    pub fn issue_at(&self, id: Uuid, email: &str, now: DateTime<Utc>) -> Result<String, SessionError> {
        let iat = u64::try_from(now.timestamp()).map_err(|_| SessionError::Clock)?;

        let claims = Claims {
            id,
            email: email.to_string(),
            iat,
            exp: iat + SESSION_TTL_SECS,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.inner.encoding)?)
    }

    /// Verify signature and expiry, returning the claims
    ///
    /// Expiry is exact: no clock-skew leeway past `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.inner.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn keys() -> SessionKeys {
        SessionKeys::from_secret(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let id = Uuid::new_v4();
        let token = keys().issue(id, "ann@x.com").unwrap();

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.id, id);
        assert_eq!(claims.email, "ann@x.com");
    }

    #[test]
    fn test_expiry_is_24_hours_after_issuance() {
        let token = keys().issue(Uuid::new_v4(), "ann@x.com").unwrap();
        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issued = Utc::now() - Duration::hours(25);
        let token = keys().issue_at(Uuid::new_v4(), "ann@x.com", issued).unwrap();
        assert!(keys().verify(&token).is_err());
    }

    #[test]
    fn test_token_expired_by_one_second_rejected() {
        let issued = Utc::now() - Duration::seconds(SESSION_TTL_SECS as i64 + 1);
        let token = keys().issue_at(Uuid::new_v4(), "ann@x.com", issued).unwrap();
        assert!(keys().verify(&token).is_err());
    }

    #[test]
    fn test_token_near_end_of_window_still_valid() {
        let issued = Utc::now() - Duration::hours(23);
        let token = keys().issue_at(Uuid::new_v4(), "ann@x.com", issued).unwrap();
        assert!(keys().verify(&token).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue(Uuid::new_v4(), "ann@x.com").unwrap();
        let other = SessionKeys::from_secret(b"another-secret");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(keys().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", keys());
        assert!(!debug.contains("test-secret"));
    }
}
