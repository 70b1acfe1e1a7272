//! Record stores for user accounts.
//!
//! # Database
//!
//! ## Tables
//!
//! - `users` - Accounts with argon2 password digests; unique on `LOWER(email COLLATE "C")`
//! - `categories` - Product categories
//! - `products` - Catalog entries
//!
//! # Migrations
//!
//! Migrations are stored in `crates/data/migrations/` and run via:
//! ```bash
//! cargo run -p jungle-cli -- migrate
//! ```
//!
//! # Stores
//!
//! [`UserStore`] is the seam the account service talks to.
//! [`PgUserStore`] backs it with `PostgreSQL`; [`MemoryUserStore`] keeps
//! everything in process for tests and tooling. Both enforce email uniqueness
//! themselves and report a duplicate as [`RepositoryError::Conflict`].

pub mod memory;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use jungle_core::{EmailKey, UserId};

use crate::config::DataConfig;
use crate::models::user::{NewUserRecord, StoredUser, UserAccount, UserRecordChanges};

pub use memory::MemoryUserStore;
pub use users::PgUserStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence operations the account service depends on.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All accounts whose email, lower-cased, equals `key`.
    ///
    /// More than one match means the uniqueness constraint was bypassed;
    /// callers decide what that means for them.
    async fn find_by_email(&self, key: &EmailKey) -> Result<Vec<StoredUser>, RepositoryError>;

    /// Whether any account other than `except` uses `key`.
    async fn email_taken(
        &self,
        key: &EmailKey,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError>;

    /// Get an account by its ID.
    async fn get_by_id(&self, id: UserId) -> Result<Option<UserAccount>, RepositoryError>;

    /// Insert a new account.
    ///
    /// Returns `RepositoryError::Conflict` if the email is already used.
    async fn insert(&self, record: NewUserRecord) -> Result<UserAccount, RepositoryError>;

    /// Replace an account's fields.
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID and
    /// `RepositoryError::Conflict` if the email belongs to another account.
    async fn update(
        &self,
        id: UserId,
        changes: UserRecordChanges,
    ) -> Result<UserAccount, RepositoryError>;

    /// Delete an account. Returns `false` if it didn't exist.
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool from configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DataConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(config.database_url.expose_secret())
        .await
}

/// Run the bundled migrations against `pool`.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
