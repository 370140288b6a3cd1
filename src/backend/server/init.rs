/**
 * Server Initialization
 *
 * Turns a `ServerConfig` into a ready `Router`.
 *
 * # Initialization Process
 *
 * 1. Open the account store: Postgres when `DATABASE_URL` is set (migrations
 *    are applied), otherwise an in-memory store
 * 2. Derive session keys from `JWT_SECRET`
 * 3. Build the inference client
 * 4. Assemble the router with its layers
 *
 * A configured database that cannot be reached or migrated is a startup
 * error. Only a missing `DATABASE_URL` falls back to memory.
 */

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::backend::auth::accounts::{AccountStore, MemoryAccountStore, PgAccountStore};
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is configured but unreachable, when migrations
/// fail, or when the inference client cannot be built.
pub async fn create_app(config: &ServerConfig) -> Result<Router, Box<dyn Error>> {
    tracing::info!("Initializing SkinScan backend server");

    let store = open_store(config).await?;

    let state = AppState::new(
        store,
        config.store_timeout,
        config.jwt_secret.as_bytes(),
        &config.inference_url,
        config.inference_timeout,
    )?;

    tracing::info!("Inference service at {}", state.inference.predict_url());

    Ok(create_router(state, config))
}

async fn open_store(config: &ServerConfig) -> Result<Arc<dyn AccountStore>, Box<dyn Error>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Accounts are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryAccountStore::new()));
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .acquire_timeout(config.store_timeout)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {}", e);
            e
        })?;

    let store = PgAccountStore::new(pool);

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database ready");

    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_without_database() {
        let config = ServerConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("test-secret".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(create_app(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_database_fails_startup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("test-secret".to_string()),
            "DATABASE_URL" => Some("postgres://nobody@127.0.0.1:1/none".to_string()),
            "STORE_TIMEOUT_SECS" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(create_app(&config).await.is_err());
    }
}
