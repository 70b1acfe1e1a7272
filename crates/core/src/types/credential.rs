//! Stored password credential types.

/// A one-way password digest in PHC string format (e.g. `$argon2id$v=19$...`).
///
/// Only the authentication service creates digests from plaintext. Stores
/// wrap the column they read back with [`PasswordDigest::from_stored`]; there
/// is deliberately no `Deserialize` impl, so a digest can never arrive from
/// request input.
///
/// `Debug` is redacted so the digest does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap a digest produced by a password hasher or read from storage.
    #[must_use]
    pub const fn from_stored(digest: String) -> Self {
        Self(digest)
    }

    /// Get the digest as a PHC string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let digest = PasswordDigest::from_stored("$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_owned());
        let debug = format!("{digest:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2id"));
    }

    #[test]
    fn test_as_str() {
        let digest = PasswordDigest::from_stored("$argon2id$x".to_owned());
        assert_eq!(digest.as_str(), "$argon2id$x");
    }
}
