//! Core types for Jungle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod price;

pub use credential::PasswordDigest;
pub use email::{EmailKey, EmailKeyError};
pub use id::*;
pub use price::{CurrencyCode, Price};
