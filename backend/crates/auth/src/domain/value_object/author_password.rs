//! Author Password Value Object
//!
//! Domain value object for author passwords. Delegates to
//! `platform::password` for the cryptographic operations.
//!
//! Two types, mirroring the two lifecycles:
//! - [`RawPassword`] - plaintext from a request, zeroized on drop
//! - [`AuthorPassword`] - Argon2id PHC string, safe to persist
//!
//! The plaintext is replaced by a fresh salted hash before every persist
//! call; the hash is re-derived on every password change.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with policy validation
    ///
    /// Used at registration and password change. Length and character
    /// checks apply; Unicode is NFKC normalized.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "Password must be at least {} characters (got {})",
                min, actual
            ))
            .with_action("Please choose a longer password"),

            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Create for sign-in verification, without policy checks
    ///
    /// A policy failure at sign-in would return early and make "wrong
    /// password" distinguishable from "unknown email" by timing.
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Author Password (Hashed, for storage)
// ============================================================================

/// Hashed author password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorPassword(String);

impl AuthorPassword {
    /// Hash a raw password for storage
    ///
    /// A fresh random salt is generated on every call, so hashing the
    /// same password twice yields different strings.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

        Ok(Self(hashed.as_phc_string().to_string()))
    }

    /// Create from database value (assumed to be a PHC string)
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Get the PHC string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a raw password against this hash
    ///
    /// Returns false (rather than erroring) when the stored value is not
    /// a parseable PHC string.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        match HashedPassword::from_phc_string(&self.0) {
            Ok(hashed) => hashed.verify(raw.inner(), pepper),
            Err(_) => false,
        }
    }

    /// Burn equivalent verification work without a real hash
    ///
    /// Called on the no-account and no-local-password paths so that all
    /// sign-in failures cost one Argon2 comparison.
    pub fn verify_dummy(raw: &RawPassword, pepper: Option<&[u8]>) {
        let _ = HashedPassword::dummy().verify(raw.inner(), pepper);
    }
}

impl fmt::Debug for AuthorPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthorPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_applies_at_registration() {
        assert!(RawPassword::new("short".to_string()).is_err());
        assert!(RawPassword::new("LongEnough123!".to_string()).is_ok());
    }

    #[test]
    fn test_no_policy_at_login() {
        // A too-short password still reaches verification at sign-in
        let raw = RawPassword::for_login("short".to_string());
        let hash = AuthorPassword::from_raw(
            &RawPassword::new("CorrectHorse9!".to_string()).unwrap(),
            None,
        )
        .unwrap();
        assert!(!hash.verify(&raw, None));
    }

    #[test]
    fn test_hash_roundtrip() {
        let raw = RawPassword::new("CorrectHorse9!".to_string()).unwrap();
        let hash = AuthorPassword::from_raw(&raw, None).unwrap();

        assert!(hash.verify(&raw, None));
        assert_ne!(hash.as_str(), "CorrectHorse9!");
        assert!(hash.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_rehash_produces_new_salt() {
        let raw = RawPassword::new("CorrectHorse9!".to_string()).unwrap();
        let first = AuthorPassword::from_raw(&raw, None).unwrap();
        let second = AuthorPassword::from_raw(&raw, None).unwrap();
        assert_ne!(first.as_str(), second.as_str());
        assert!(second.verify(&raw, None));
    }

    #[test]
    fn test_unparseable_stored_hash_never_verifies() {
        let stored = AuthorPassword::from_db("plaintext-left-by-a-bug");
        let raw = RawPassword::for_login("plaintext-left-by-a-bug".to_string());
        assert!(!stored.verify(&raw, None));
    }
}
