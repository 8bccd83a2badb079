//! # Daybook Core
//!
//! Core library for Daybook - an encrypted, date-keyed personal journal.
//!
//! This crate provides the journal store and the cryptography behind it,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Password-based key derivation and per-entry AEAD encryption
//! - **storage**: The date-ordered journal store and its flat key/value file format
//! - **fs**: Atomic file replacement
//!
//! Every entry is encrypted on its own, with a fresh salt and nonce, so the
//! backing file never holds plaintext and no two ciphertexts can be compared.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod storage;

pub use error::{DaybookError, Result};
pub use storage::Journal;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
