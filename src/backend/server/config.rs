/**
 * Server Configuration
 *
 * Loads `ServerConfig` from the environment. `.env` is read first when
 * present, so local development only needs a file next to the binary.
 *
 * # Variables
 *
 * | Variable                 | Default                 |
 * |--------------------------|-------------------------|
 * | `SERVER_PORT`            | `3000`                  |
 * | `DATABASE_URL`           | unset (in-memory store) |
 * | `JWT_SECRET`             | required                |
 * | `INFERENCE_URL`          | `http://127.0.0.1:8000` |
 * | `REQUEST_TIMEOUT_SECS`   | `30`                    |
 * | `STORE_TIMEOUT_SECS`     | `5`                     |
 * | `INFERENCE_TIMEOUT_SECS` | `25`                    |
 * | `MAX_UPLOAD_BYTES`       | `10485760`              |
 *
 * # Error Handling
 *
 * A missing `JWT_SECRET` or an unparsable value stops startup. The
 * inference timeout must be shorter than the request timeout.
 */

use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 25;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingValue(&'static str),

    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} is not a valid URL: {value:?}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("INFERENCE_TIMEOUT_SECS ({inference}s) must be shorter than REQUEST_TIMEOUT_SECS ({request}s)")]
    TimeoutOrder { inference: u64, request: u64 },
}

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub inference_url: String,
    pub request_timeout: Duration,
    pub store_timeout: Duration,
    pub inference_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let inference_url = get("INFERENCE_URL").unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());
        if Url::parse(&inference_url).is_err() {
            return Err(ConfigError::InvalidUrl {
                key: "INFERENCE_URL",
                value: inference_url,
            });
        }

        let request_timeout = parse_or(&get, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let inference_timeout =
            parse_or(&get, "INFERENCE_TIMEOUT_SECS", DEFAULT_INFERENCE_TIMEOUT_SECS)?;
        if inference_timeout >= request_timeout {
            return Err(ConfigError::TimeoutOrder {
                inference: inference_timeout,
                request: request_timeout,
            });
        }

        Ok(Self {
            port: parse_or(&get, "SERVER_PORT", DEFAULT_PORT)?,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            inference_url,
            request_timeout: Duration::from_secs(request_timeout),
            store_timeout: Duration::from_secs(parse_or(
                &get,
                "STORE_TIMEOUT_SECS",
                DEFAULT_STORE_TIMEOUT_SECS,
            )?),
            inference_timeout: Duration::from_secs(inference_timeout),
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

// The secret and DSN (which may carry a password) stay out of logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("inference_url", &self.inference_url)
            .field("request_timeout", &self.request_timeout)
            .field("store_timeout", &self.store_timeout)
            .field("inference_timeout", &self.inference_timeout)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
