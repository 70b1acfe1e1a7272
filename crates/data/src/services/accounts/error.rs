//! Account service error types.

use thiserror::Error;

use jungle_core::Errors;

use crate::db::RepositoryError;

/// Errors that can occur while creating or changing accounts.
///
/// Authentication never produces one of these for bad credentials; it
/// returns `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum AccountError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Invalid(Errors),

    /// Account to update does not exist.
    #[error("account not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AccountError {
    /// Validation errors, if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&Errors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
