//! User account commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! echo 'password' | jungle user create --first-name John --last-name Doe -e test@test.com
//!
//! # Check credentials
//! JUNGLE_PASSWORD=password jungle user authenticate -e test@test.com
//! ```
//!
//! # Environment Variables
//!
//! - `JUNGLE_DATABASE_URL` - `PostgreSQL` connection string
//! - `JUNGLE_PASSWORD` - Password to use; read from stdin when unset
//!
//! Passwords are never echoed or logged.

use std::io::BufRead;

use secrecy::{ExposeSecret, SecretString};

use jungle_core::UserId;
use jungle_data::db::PgUserStore;
use jungle_data::models::NewUserAccount;
use jungle_data::services::AccountService;

use super::CommandError;

const PASSWORD_ENV: &str = "JUNGLE_PASSWORD";

/// Register a new account.
///
/// Validation failures are reported with their full messages, e.g.
/// `Email has already been taken`.
pub async fn create(
    first_name: String,
    last_name: String,
    email: String,
) -> Result<UserId, CommandError> {
    let password = read_password(std::env::var(PASSWORD_ENV).ok(), std::io::stdin().lock())?;

    let pool = super::connect().await?;
    let accounts = AccountService::new(PgUserStore::new(&pool));

    let account = NewUserAccount {
        first_name,
        last_name,
        email,
        password: Some(password),
        password_confirmation: None,
    };

    let user = accounts.register(account).await?;

    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        "Account created for {}",
        user.full_name()
    );
    Ok(user.id)
}

/// Verify an email/password pair.
///
/// Returns `CommandError::Rejected` without saying whether the email or the
/// password was wrong.
pub async fn authenticate(email: &str) -> Result<UserId, CommandError> {
    let password = read_password(std::env::var(PASSWORD_ENV).ok(), std::io::stdin().lock())?;

    let pool = super::connect().await?;
    let accounts = AccountService::new(PgUserStore::new(&pool));

    let user = accounts
        .authenticate_with_credentials(email, password.expose_secret())
        .await?
        .ok_or(CommandError::Rejected)?;

    tracing::info!(user_id = %user.id, "Authenticated as {}", user.full_name());
    Ok(user.id)
}

/// Take the password from the environment, or else the first line of `input`.
fn read_password(from_env: Option<String>, mut input: impl BufRead) -> Result<SecretString, CommandError> {
    if let Some(password) = from_env {
        return Ok(SecretString::from(password));
    }

    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_owned();
    Ok(SecretString::from(password))
}
