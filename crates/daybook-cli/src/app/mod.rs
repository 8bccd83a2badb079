//! Application-level utilities for the Daybook CLI.
//!
//! This module provides:
//! - Path resolution for config and journal files
//! - Passphrase handling with retry logic
//! - The `AppContext` handed to every command

mod context;
mod passphrase;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_journal, resolve_config_path};
