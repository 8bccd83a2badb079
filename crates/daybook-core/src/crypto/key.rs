//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! Every entry carries its own random salt, so a key is derived once per
//! encryption and once per decryption. The iteration count is part of the
//! file format: journals written with one count cannot be read with another.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{DaybookError, Result};

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Minimum accepted salt length in bytes.
const MIN_SALT_LENGTH: usize = 16;

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a password and salt.
///
/// Same password + salt always produces the same key. An empty password is
/// accepted here; password policy for new journals lives in
/// [`validate_passphrase`](super::validate_passphrase).
///
/// # Errors
///
/// Returns `DaybookError::InvalidArgument` if the salt is shorter than 16 bytes.
///
/// # Examples
///
/// ```
/// use daybook_core::crypto::derive_key;
///
/// let salt = b"unique-salt-16by";
/// let key = derive_key("my-password", salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() < MIN_SALT_LENGTH {
        return Err(DaybookError::InvalidArgument(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key_bytes)
        .map_err(|e| DaybookError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = b"unique-salt-1234567890123456";

        let key1 = derive_key("test-password", salt).unwrap();
        let key2 = derive_key("test-password", salt).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("test-password", b"salt1-1234567890123456").unwrap();
        let key2 = derive_key("test-password", b"salt2-1234567890123456").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = b"fixed-salt-123456789012345";

        let key1 = derive_key("password-one", salt).unwrap();
        let key2 = derive_key("password-two", salt).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_allowed() {
        let key = derive_key("", b"salt-1234567890123456").unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }

    #[test]
    fn test_short_salt_rejected() {
        let result = derive_key("test-password", b"short");
        assert!(matches!(result, Err(DaybookError::InvalidArgument(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Salt must be at least 16 bytes"));
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password", b"salt-1234567890123456").unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
