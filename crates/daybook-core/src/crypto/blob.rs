//! The self-contained encrypted entry format.
//!
//! Layout of the decoded bytes:
//!
//! ```text
//! +-----------+------------+---------------------------+
//! | salt (16) | nonce (12) | ciphertext + GCM tag (16) |
//! +-----------+------------+---------------------------+
//! ```
//!
//! The whole thing is rendered as standard, padded Base64 so it can live in a
//! flat text file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DaybookError, Result};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Bytes that precede the ciphertext.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// Base64 text of an encrypted entry.
///
/// Construction only checks that the text is valid Base64. The length check
/// happens in [`EncodedBlob::decode`], so a truncated value loads fine and
/// fails when someone tries to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlob(String);

impl EncodedBlob {
    /// Wrap Base64 text read from storage.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::MalformedBlob` if the text is not valid Base64.
    pub fn from_base64(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        STANDARD
            .decode(text.as_bytes())
            .map_err(|e| DaybookError::MalformedBlob(format!("invalid Base64: {}", e)))?;
        Ok(Self(text))
    }

    /// Assemble a blob from its parts.
    pub(crate) fn from_parts(salt: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Self {
        let mut combined = Vec::with_capacity(salt.len() + nonce.len() + ciphertext.len());
        combined.extend_from_slice(salt);
        combined.extend_from_slice(nonce);
        combined.extend_from_slice(ciphertext);
        Self(STANDARD.encode(combined))
    }

    /// The Base64 text as stored on disk.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into salt, nonce and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::MalformedBlob` if the text is not Base64 or the
    /// decoded bytes are shorter than the 28-byte header.
    pub fn decode(&self) -> Result<BlobParts> {
        let bytes = STANDARD
            .decode(self.0.as_bytes())
            .map_err(|e| DaybookError::MalformedBlob(format!("invalid Base64: {}", e)))?;
        if bytes.len() < HEADER_LEN {
            return Err(DaybookError::MalformedBlob(format!(
                "expected at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        Ok(BlobParts { bytes })
    }
}

impl std::fmt::Display for EncodedBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded blob bytes, split on demand.
#[derive(Debug)]
pub struct BlobParts {
    bytes: Vec<u8>,
}

impl BlobParts {
    pub fn salt(&self) -> &[u8] {
        &self.bytes[..SALT_LEN]
    }

    pub fn nonce(&self) -> &[u8] {
        &self.bytes[SALT_LEN..HEADER_LEN]
    }

    /// Ciphertext with the trailing authentication tag.
    pub fn ciphertext(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_split_at_header() {
        let salt = [1u8; SALT_LEN];
        let nonce = [2u8; NONCE_LEN];
        let ciphertext = [3u8; 20];

        let blob = EncodedBlob::from_parts(&salt, &nonce, &ciphertext);
        let parts = blob.decode().unwrap();

        assert_eq!(parts.salt(), &salt);
        assert_eq!(parts.nonce(), &nonce);
        assert_eq!(parts.ciphertext(), &ciphertext);
    }

    #[test]
    fn test_header_only_blob_decodes_with_empty_ciphertext() {
        let blob = EncodedBlob::from_base64(STANDARD.encode([0u8; HEADER_LEN])).unwrap();
        let parts = blob.decode().unwrap();
        assert!(parts.ciphertext().is_empty());
    }

    #[test]
    fn test_short_blob_is_malformed() {
        let blob = EncodedBlob::from_base64(STANDARD.encode([0u8; HEADER_LEN - 1])).unwrap();
        let err = blob.decode().unwrap_err();
        assert!(matches!(err, DaybookError::MalformedBlob(_)));
        assert!(err.to_string().contains("got 27"));
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let result = EncodedBlob::from_base64("not base64!!");
        assert!(matches!(result, Err(DaybookError::MalformedBlob(_))));
    }

    #[test]
    fn test_display_is_stored_text() {
        let text = STANDARD.encode([7u8; 40]);
        let blob = EncodedBlob::from_base64(text.clone()).unwrap();
        assert_eq!(blob.to_string(), text);
        assert_eq!(blob.as_str(), text);
    }
}
