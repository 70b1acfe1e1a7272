//! Integration tests for Jungle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jungle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `accounts_validation` - Sign-up and update rules
//! - `accounts_authentication` - Credential checks
//! - `catalog_validation` - Product and category rules
//!
//! Everything runs against [`MemoryUserStore`], so no database is needed.

use jungle_data::db::MemoryUserStore;
use jungle_data::models::{NewUserAccount, UserAccount};
use jungle_data::services::AccountService;

/// Account service over a fresh in-memory store.
#[must_use]
pub fn accounts() -> AccountService<MemoryUserStore> {
    AccountService::new(MemoryUserStore::new())
}

/// `John Doe <test@test.com>` with password `password`.
#[must_use]
pub fn john() -> NewUserAccount {
    NewUserAccount::new("John", "Doe", "test@test.com", "password")
        .with_password_confirmation("password")
}

/// Register [`john`] and return the stored account.
///
/// # Panics
///
/// Panics if registration fails, which only happens when the store already
/// holds the email.
#[allow(clippy::expect_used)]
pub async fn register_john(service: &AccountService<MemoryUserStore>) -> UserAccount {
    service
        .register(john())
        .await
        .expect("registering John should succeed")
}
