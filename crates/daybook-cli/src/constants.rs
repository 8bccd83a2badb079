//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, journal, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong passphrase, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// One or more entries could not be decrypted.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable holding the journal passphrase.
pub const PASSPHRASE_ENV: &str = "DAYBOOK_PASSPHRASE";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DAYBOOK_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DAYBOOK_LOG";

/// Passphrase prompts allowed before giving up.
pub const MAX_PASSPHRASE_ATTEMPTS: u32 = 3;
