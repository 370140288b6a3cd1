/**
 * Authentication Handler Types
 *
 * Request and response bodies for the registration, login and "me"
 * endpoints. Request fields are optional at the serde level so that a
 * missing field is reported as a validation error (400) rather than a body
 * rejection.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::accounts::Account;
use crate::backend::error::ApiError;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    pub password: Option<String>,
    /// Must equal `password`
    pub confirm_password: Option<String>,
}

/// Registration form after validation
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<Registration, ApiError> {
        let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
            present(self.name),
            present(self.email),
            present(self.password),
            present(self.confirm_password),
        ) else {
            return Err(ApiError::validation("All fields are required"));
        };

        if password != confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }

        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    /// Verified against the stored hash
    pub password: Option<String>,
}

/// Login credentials after validation
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credentials, ApiError> {
        match (present(self.email), present(self.password)) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(ApiError::validation("Email and password required")),
        }
    }
}

/// Body of every successful auth response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

/// Empty strings count as missing
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> RegisterRequest {
        RegisterRequest {
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
            password: Some("Secret123".to_string()),
            confirm_password: Some("Secret123".to_string()),
        }
    }

    #[test]
    fn test_register_deserializes_camel_case() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "email": "ann@x.com",
            "password": "Secret123",
            "confirmPassword": "Secret123"
        }))
        .unwrap();
        assert_eq!(request.confirm_password.as_deref(), Some("Secret123"));
    }

    #[test]
    fn test_register_valid() {
        let registration = ann().validate().unwrap();
        assert_eq!(registration.name, "Ann");
        assert_eq!(registration.email, "ann@x.com");
    }

    #[test]
    fn test_register_missing_field() {
        let request = RegisterRequest {
            name: None,
            ..ann()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn test_register_empty_field_counts_as_missing() {
        let request = RegisterRequest {
            email: Some(String::new()),
            ..ann()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn test_register_password_mismatch() {
        let request = RegisterRequest {
            confirm_password: Some("Secret124".to_string()),
            ..ann()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "Passwords do not match");
    }

    #[test]
    fn test_login_missing_password() {
        let request = LoginRequest {
            email: Some("ann@x.com".to_string()),
            password: None,
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), "Email and password required");
    }
}
