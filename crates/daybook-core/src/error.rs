//! Error types for Daybook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them
//! to user-facing messages and exit codes. Nothing in the core logs,
//! retries or swallows an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Daybook operations.
pub type Result<T> = std::result::Result<T, DaybookError>;

/// Core error type for Daybook operations.
#[derive(Debug, Error)]
pub enum DaybookError {
    /// Journal file does not exist
    #[error("Journal file not found: {}", .0.display())]
    JournalNotFound(PathBuf),

    /// Journal file exists but cannot be written
    #[error("Journal file is read-only: {}", .0.display())]
    ReadOnly(PathBuf),

    /// I/O error while reading or writing the journal
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Backing file is structurally invalid
    #[error("Malformed journal file: {0}")]
    Load(String),

    /// Authentication failed: wrong password or tampered data
    #[error("Decryption failed: wrong password or corrupted entry")]
    DecryptionFailed,

    /// Encoded entry is not a well-formed blob
    #[error("Malformed entry: {0}")]
    MalformedBlob(String),

    /// Caller broke an API contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key derivation, entropy or cipher setup failed
    #[error("Encryption error: {0}")]
    Crypto(String),
}

impl DaybookError {
    /// True for failures that concern the backing file rather than an entry.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            DaybookError::JournalNotFound(_)
                | DaybookError::ReadOnly(_)
                | DaybookError::Io { .. }
                | DaybookError::Load(_)
        )
    }

    /// True when an entry could not be authenticated or decoded.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            DaybookError::DecryptionFailed | DaybookError::MalformedBlob(_)
        )
    }
}
