//! User account domain types.
//!
//! Candidates (`NewUserAccount`, `UserAccountChanges`) carry plaintext
//! passwords as [`SecretString`] and never reach a store. Stores only ever see
//! records (`NewUserRecord`, `UserRecordChanges`) holding a digest produced by
//! the account service.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;

use jungle_core::{PasswordDigest, UserId};

/// A persisted user account (domain type).
///
/// The password digest is intentionally absent; see [`StoredUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    /// Unique user ID.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address as submitted, trimmed. Case is preserved.
    pub email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An account together with its password digest, as read for authentication.
#[derive(Debug, Clone)]
pub struct StoredUser {
    /// The account itself.
    pub account: UserAccount,
    /// Argon2 digest of the account's password.
    pub password_digest: PasswordDigest,
}

/// Sign-up input for a new account.
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password. Required on creation.
    pub password: Option<SecretString>,
    /// Optional repeat of the password; checked only when present.
    pub password_confirmation: Option<SecretString>,
}

impl NewUserAccount {
    /// Build a sign-up with a password and no confirmation.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: Some(SecretString::from(password.into())),
            password_confirmation: None,
        }
    }

    /// Attach a password confirmation.
    #[must_use]
    pub fn with_password_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(SecretString::from(confirmation.into()));
        self
    }

    /// Drop the password, e.g. to exercise the missing-password path.
    #[must_use]
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }
}

/// Partial update to an existing account.
///
/// `None` fields keep their stored value. The password is re-hashed only when
/// a new one is supplied.
#[derive(Debug, Clone, Default)]
pub struct UserAccountChanges {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<SecretString>,
    /// Repeat of the new password.
    pub password_confirmation: Option<SecretString>,
}

impl UserAccountChanges {
    /// Change the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Change the given name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Change the family name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Change the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Confirm the new password.
    #[must_use]
    pub fn password_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(SecretString::from(confirmation.into()));
        self
    }
}

/// A validated account ready to insert.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, as submitted.
    pub email: String,
    /// Digest of the account password.
    pub password_digest: PasswordDigest,
}

/// A validated replacement for an existing account's fields.
#[derive(Debug, Clone)]
pub struct UserRecordChanges {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// New digest, or `None` to keep the stored one.
    pub password_digest: Option<PasswordDigest>,
}
