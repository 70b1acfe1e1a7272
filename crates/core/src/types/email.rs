//! Normalized email lookup key.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when normalizing an [`EmailKey`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailKeyError {
    /// The input is empty or only whitespace.
    #[error("email cannot be blank")]
    Blank,
}

/// A trimmed, lower-cased email address used for lookups and uniqueness.
///
/// Only ASCII letters are folded. Postgres `LOWER()` under the `"C"`
/// collation does the same, so both stores agree on non-ASCII addresses
/// (`İ`, `É`) instead of depending on the database locale.
///
/// Accounts keep the email exactly as it was submitted. Every comparison
/// between emails goes through this key, so `" Test@Example.COM "` and
/// `"test@example.com"` refer to the same account.
///
/// ## Examples
///
/// ```
/// use jungle_core::EmailKey;
///
/// let key = EmailKey::normalize("  TeSt@TeSt.cOm ").unwrap();
/// assert_eq!(key.as_str(), "test@test.com");
///
/// assert!(EmailKey::normalize("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmailKey(String);

impl EmailKey {
    /// Normalize raw user input into a lookup key.
    ///
    /// # Errors
    ///
    /// Returns [`EmailKeyError::Blank`] if nothing is left after trimming.
    pub fn normalize(raw: &str) -> Result<Self, EmailKeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailKeyError::Blank);
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns `true` if `stored` normalizes to this key.
    ///
    /// Stored emails are compared lower-cased, the way a
    /// `LOWER(email COLLATE "C") = $1` query would.
    #[must_use]
    pub fn matches(&self, stored: &str) -> bool {
        stored.trim().to_ascii_lowercase() == self.0
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmailKey {
    type Err = EmailKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl AsRef<str> for EmailKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature). Keys are only ever bound as query
// parameters, so there is no Decode impl.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for EmailKey {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for EmailKey {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
