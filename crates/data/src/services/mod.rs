//! Business logic services.

pub mod accounts;
pub mod catalog;

pub use accounts::{AccountError, AccountService};
