//! Argon2 password hashing.

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use jungle_core::PasswordDigest;

use super::AccountError;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Digest verified when no account matches, so a miss costs about as much as
/// a wrong password.
static MISS_DIGEST: LazyLock<Option<PasswordDigest>> =
    LazyLock::new(|| hash_password("jungle-no-such-account").ok());

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `AccountError::PasswordHash` if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<PasswordDigest, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| PasswordDigest::from_stored(hash.to_string()))
        .map_err(|_| AccountError::PasswordHash)
}

/// Verify a password against a stored digest.
///
/// An unparsable digest counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, digest: &PasswordDigest) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest.as_str()) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Spend a verification on a throwaway digest. Always a mismatch.
pub fn verify_without_account(password: &str) {
    if let Some(digest) = MISS_DIGEST.as_ref() {
        let _ = verify_password(password, digest);
    }
}
