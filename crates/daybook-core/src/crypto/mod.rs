//! Cryptographic operations for Daybook.
//!
//! - **PBKDF2-HMAC-SHA256** derives a 256-bit key from the password and a
//!   per-entry random salt
//! - **AES-256-GCM** encrypts and authenticates each entry independently
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the journal file
//! - Silent corruption or tampering of individual entries
//! - Correlating entries by comparing ciphertexts
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Access to an unlocked session / memory

pub mod blob;
pub mod cipher;
pub mod key;
pub mod passphrase;

pub use blob::{BlobParts, EncodedBlob};
pub use cipher::{decrypt, encrypt};
pub use key::{derive_key, DerivedKey};
pub use passphrase::validate_passphrase;
