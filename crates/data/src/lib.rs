//! Jungle Data - accounts, catalog records and their persistence.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven database settings
//! - [`db`] - The [`db::UserStore`] seam with `PostgreSQL` and in-memory stores
//! - [`models`] - Account, product and category types
//! - [`services`] - Account registration/authentication and catalog validation
//!
//! # Example
//!
//! ```
//! use jungle_data::db::MemoryUserStore;
//! use jungle_data::models::NewUserAccount;
//! use jungle_data::services::AccountService;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let accounts = AccountService::new(MemoryUserStore::new());
//! let signup = NewUserAccount::new("John", "Doe", "test@test.com", "password");
//! let user = accounts.register(signup).await.unwrap();
//!
//! let found = accounts
//!     .authenticate_with_credentials("  TeSt@TeSt.cOm ", "password")
//!     .await
//!     .unwrap();
//! assert_eq!(found, Some(user));
//! # });
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod services;
