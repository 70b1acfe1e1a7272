//! Account validation rules.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

use jungle_core::validation::{Blank, Rules, Violation};

use super::password::MIN_PASSWORD_LENGTH;
use crate::models::user::{NewUserAccount, UserAccount, UserAccountChanges};

/// Everything the account rules look at, with the uniqueness lookup already
/// answered.
pub struct UserCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<SecretString>,
    pub password_confirmation: Option<SecretString>,
    /// Creation requires a password; updates only check one if supplied.
    pub password_required: bool,
    pub email_taken: bool,
}

impl UserCandidate {
    pub fn for_create(account: &NewUserAccount, email_taken: bool) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
            password_confirmation: account.password_confirmation.clone(),
            password_required: true,
            email_taken,
        }
    }

    /// Merge `changes` over the stored account.
    pub fn for_update(
        existing: &UserAccount,
        changes: &UserAccountChanges,
        email_taken: bool,
    ) -> Self {
        Self {
            first_name: changes
                .first_name
                .clone()
                .unwrap_or_else(|| existing.first_name.clone()),
            last_name: changes
                .last_name
                .clone()
                .unwrap_or_else(|| existing.last_name.clone()),
            email: changes
                .email
                .clone()
                .unwrap_or_else(|| existing.email.clone()),
            password: changes.password.clone(),
            password_confirmation: changes.password_confirmation.clone(),
            password_required: false,
            email_taken,
        }
    }

    fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }

    /// On creation a missing password is measured as empty.
    fn password_to_measure(&self) -> Option<&str> {
        match self.password() {
            None if self.password_required => Some(""),
            password => password,
        }
    }

    fn password_confirmation(&self) -> Option<&str> {
        self.password_confirmation.as_ref().map(|p| p.expose_secret())
    }
}

/// Declared once; evaluated in this order.
pub static USER_RULES: LazyLock<Rules<UserCandidate>> = LazyLock::new(|| {
    Rules::new()
        .presence("first_name", |c: &UserCandidate| &c.first_name)
        .presence("last_name", |c: &UserCandidate| &c.last_name)
        .presence("email", |c: &UserCandidate| &c.email)
        .uniqueness("email", |c: &UserCandidate| c.email_taken)
        .rule("password", |c: &UserCandidate| {
            (c.password_required && c.password().is_blank()).then_some(Violation::Blank)
        })
        .min_length("password", MIN_PASSWORD_LENGTH, UserCandidate::password_to_measure)
        .confirmation("password_confirmation", "password", |c: &UserCandidate| {
            if c.password().is_blank() {
                (None, None)
            } else {
                (c.password(), c.password_confirmation())
            }
        })
});
