//! Database migration command.
//!
//! # Environment Variables
//!
//! - `JUNGLE_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/data/migrations/`:
//! ```text
//! migrations/
//! ├── 20260301000001_create_users.sql
//! └── 20260301000002_create_catalog.sql
//! ```

use jungle_data::db;

use super::CommandError;

/// Run all pending migrations.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
