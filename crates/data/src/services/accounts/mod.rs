//! Account service.
//!
//! Validates, registers and updates user accounts, and authenticates an
//! email/password pair against the stored argon2 digest.
//!
//! # Uniqueness
//!
//! The "Email has already been taken" rule is answered by a store lookup
//! before the rules run. The store enforces the same constraint on write, and
//! a `Conflict` from it is reported as the same validation failure, so a race
//! between two sign-ups ends with exactly one account.

mod error;
pub mod password;
mod rules;

pub use error::AccountError;
pub use password::MIN_PASSWORD_LENGTH;

use secrecy::ExposeSecret;
use tracing::instrument;

use jungle_core::validation::{Errors, Validation, Violation};
use jungle_core::{EmailKey, UserId};

use crate::db::{RepositoryError, UserStore};
use crate::models::user::{
    NewUserAccount, NewUserRecord, UserAccount, UserAccountChanges, UserRecordChanges,
};
use password::{hash_password, verify_password, verify_without_account};
use rules::{USER_RULES, UserCandidate};

/// Account service over any [`UserStore`].
pub struct AccountService<S> {
    store: S,
}

impl<S: UserStore> AccountService<S> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate a sign-up without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the uniqueness lookup fails. Invalid input
    /// is never an error; it is reported through the returned [`Validation`].
    pub async fn validate(&self, account: &NewUserAccount) -> Result<Validation, RepositoryError> {
        let email_taken = self.email_taken(&account.email, None).await?;
        let candidate = UserCandidate::for_create(account, email_taken);
        Ok(USER_RULES.validate(&candidate).into())
    }

    async fn email_taken(
        &self,
        email: &str,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError> {
        match EmailKey::normalize(email) {
            Ok(key) => self.store.email_taken(&key, except).await,
            // Blank emails are reported by the presence rule.
            Err(_) => Ok(false),
        }
    }

    // =========================================================================
    // Registration & Updates
    // =========================================================================

    /// Validate, hash the password and persist a new account.
    ///
    /// The email is stored with surrounding whitespace removed and its case
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Invalid` if any rule fails, including a duplicate
    /// email detected by the store at insert time.
    /// Returns `AccountError::PasswordHash` if hashing fails.
    /// Returns `AccountError::Repository` for other storage failures.
    #[instrument(skip_all)]
    pub async fn register(&self, account: NewUserAccount) -> Result<UserAccount, AccountError> {
        let validation = self.validate(&account).await?;
        if !validation.is_valid() {
            tracing::debug!(errors = %validation.errors(), "registration rejected");
            return Err(AccountError::Invalid(validation.into_errors()));
        }

        let Some(password) = account.password.as_ref() else {
            return Err(single_error("password", Violation::Blank));
        };
        let password_digest = hash_password(password.expose_secret())?;

        let record = NewUserRecord {
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email.trim().to_owned(),
            password_digest,
        };

        let user = self.store.insert(record).await.map_err(map_conflict)?;

        tracing::info!(user_id = %user.id, "account registered");
        Ok(user)
    }

    /// Apply `changes` to an existing account.
    ///
    /// Uniqueness ignores the account's own row. The password is re-hashed
    /// only when a new one is supplied.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if the account doesn't exist.
    /// Returns `AccountError::Invalid` if any rule fails.
    /// Returns `AccountError::PasswordHash` if hashing fails.
    /// Returns `AccountError::Repository` for other storage failures.
    #[instrument(skip(self, changes), fields(user_id = %id))]
    pub async fn update(
        &self,
        id: UserId,
        changes: UserAccountChanges,
    ) -> Result<UserAccount, AccountError> {
        let existing = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(AccountError::NotFound)?;

        let email = changes.email.as_deref().unwrap_or(&existing.email);
        let email_taken = self.email_taken(email, Some(id)).await?;
        let candidate = UserCandidate::for_update(&existing, &changes, email_taken);

        let errors = USER_RULES.validate(&candidate);
        if !errors.is_empty() {
            tracing::debug!(errors = %errors, "account update rejected");
            return Err(AccountError::Invalid(errors));
        }

        let password_digest = candidate
            .password
            .as_ref()
            .map(|p| hash_password(p.expose_secret()))
            .transpose()?;
        let password_changed = password_digest.is_some();

        let record = UserRecordChanges {
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email.trim().to_owned(),
            password_digest,
        };

        let user = self
            .store
            .update(id, record)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AccountError::NotFound,
                other => map_conflict(other),
            })?;

        tracing::info!(password_changed, "account updated");
        Ok(user)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Authenticate with an email and a plaintext password.
    ///
    /// The email is trimmed and lower-cased before lookup. Returns `Ok(None)`
    /// when the email is blank or unknown, matches more than one account, or
    /// the password is wrong; callers cannot tell these apart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` only if the lookup itself fails.
    #[instrument(skip_all)]
    pub async fn authenticate_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserAccount>, RepositoryError> {
        let Ok(key) = EmailKey::normalize(email) else {
            verify_without_account(password);
            tracing::debug!("credentials rejected");
            return Ok(None);
        };

        let mut matches = self.store.find_by_email(&key).await?;
        if matches.len() > 1 {
            tracing::warn!(
                email = %key,
                matches = matches.len(),
                "multiple accounts share an email, refusing to authenticate"
            );
        }

        let found = if matches.len() == 1 { matches.pop() } else { None };
        let Some(stored) = found else {
            verify_without_account(password);
            tracing::debug!(email = %key, "credentials rejected");
            return Ok(None);
        };

        if !verify_password(password, &stored.password_digest) {
            tracing::debug!(email = %key, "credentials rejected");
            return Ok(None);
        }

        tracing::info!(user_id = %stored.account.id, "authenticated");
        Ok(Some(stored.account))
    }
}

fn single_error(field: &'static str, violation: Violation) -> AccountError {
    let mut errors = Errors::new();
    errors.add(field, violation);
    AccountError::Invalid(errors)
}

/// A store-level uniqueness violation is the same failure as the rule.
fn map_conflict(e: RepositoryError) -> AccountError {
    match e {
        RepositoryError::Conflict(_) => single_error("email", Violation::Taken),
        other => AccountError::Repository(other),
    }
}
