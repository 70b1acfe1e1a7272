//! CLI command implementations.

pub mod migrate;
pub mod user;

use sqlx::PgPool;
use thiserror::Error;

use jungle_data::config::{ConfigError, DataConfig};
use jungle_data::db::{self, RepositoryError};
use jungle_data::services::AccountError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Store operation failed.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Account could not be created.
    #[error("{0}")]
    Account(#[from] AccountError),

    /// The password could not be read.
    #[error("failed to read password: {0}")]
    PasswordInput(#[from] std::io::Error),

    /// Credentials were rejected.
    #[error("invalid email or password")]
    Rejected,
}

/// Load configuration and open a pool.
async fn connect() -> Result<PgPool, CommandError> {
    let config = DataConfig::from_env()?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&config).await?)
}
