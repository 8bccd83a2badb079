//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Passphrase prompting and entry body reading (`input`)
//! - Date argument parsing (`parsing`)

mod input;
mod parsing;

pub use input::{passphrase_from_env, prompt_new_passphrase, prompt_passphrase, read_entry_body};
pub use parsing::parse_date_arg;
