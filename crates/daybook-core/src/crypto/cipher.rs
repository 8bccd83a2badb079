//! AES-256-GCM encryption of single journal entries.
//!
//! Each call draws a fresh salt and nonce from the OS, derives a key with
//! [`derive_key`], and seals the UTF-8 text with no associated data. The
//! result is an [`EncodedBlob`] carrying everything needed to decrypt it
//! again except the password.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::blob::{EncodedBlob, NONCE_LEN, SALT_LEN};
use crate::crypto::key::derive_key;
use crate::error::{DaybookError, Result};

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| DaybookError::Crypto(format!("Failed to gather entropy: {}", e)))?;
    Ok(bytes)
}

fn cipher_for(password: &str, salt: &[u8]) -> Result<Aes256Gcm> {
    let key = derive_key(password, salt)?;
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| DaybookError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt `plaintext` under a key derived from `password`.
///
/// Encrypting the same text twice with the same password yields different
/// blobs.
///
/// # Examples
///
/// ```
/// use daybook_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt("dear diary", "my-password").unwrap();
/// assert_eq!(decrypt(&blob, "my-password").unwrap(), "dear diary");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<EncodedBlob> {
    let salt = random_bytes::<SALT_LEN>()?;
    let nonce = random_bytes::<NONCE_LEN>()?;

    let cipher = cipher_for(password, &salt)?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|e| DaybookError::Crypto(format!("Encryption failed: {}", e)))?;

    Ok(EncodedBlob::from_parts(&salt, &nonce, &ciphertext))
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// - `DaybookError::MalformedBlob` if the blob is shorter than salt + nonce,
///   or the authenticated plaintext is not UTF-8
/// - `DaybookError::DecryptionFailed` if authentication fails (wrong
///   password, tampered or truncated ciphertext)
pub fn decrypt(blob: &EncodedBlob, password: &str) -> Result<String> {
    let parts = blob.decode()?;

    let cipher = cipher_for(password, parts.salt())?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(parts.nonce()), parts.ciphertext())
        .map_err(|_| DaybookError::DecryptionFailed)?;

    String::from_utf8(plaintext)
        .map_err(|_| DaybookError::MalformedBlob("plaintext is not valid UTF-8".to_string()))
}
