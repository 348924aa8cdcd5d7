//! SQLite connection pool and schema provisioning

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database url is not set")]
    MissingUrl,

    #[error("Database error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open the pool and create the `books` table if it does not exist
pub async fn connect(config: &DatabaseConfig) -> Result<Pool<Sqlite>, DatabaseError> {
    if config.url.trim().is_empty() {
        return Err(DatabaseError::MissingUrl);
    }

    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    // Each in-memory connection is its own database, so keep exactly one alive
    let in_memory = config.url.contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
