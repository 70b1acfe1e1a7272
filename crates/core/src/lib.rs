//! Jungle Core - Shared types library.
//!
//! This crate provides the types and the validation engine used across all
//! Jungle components:
//! - `data` - Account, product and category records, stores, authentication
//! - `cli` - Command-line tools for migrations and account management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access.
//! Rules that need a store (such as email uniqueness) receive the answer from
//! the caller, so everything here stays synchronous and pure.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, email keys and password digests
//! - [`validation`] - Ordered field rules and Rails-style violation messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{Errors, FieldError, Rules, Validation, Violation};
