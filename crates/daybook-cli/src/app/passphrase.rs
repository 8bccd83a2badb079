//! Passphrase handling and journal opening with retry logic.

use std::io::IsTerminal;
use std::path::Path;

use daybook_core::{DaybookError, Journal};

use crate::constants::MAX_PASSPHRASE_ATTEMPTS;
use crate::errors::CliError;
use crate::helpers::{passphrase_from_env, prompt_passphrase};

use super::resolver::missing_journal;

/// Open the journal and verify the passphrase against its first entry.
///
/// `Journal::open` accepts any password, so every successful open is followed
/// by `test_password`; a journal that fails it is dropped unsaved.
pub fn open_journal_with_retry(path: &Path, no_input: bool) -> anyhow::Result<Journal> {
    if !path.exists() {
        return Err(missing_journal(path).into());
    }

    if let Some(passphrase) = passphrase_from_env() {
        let journal = open_verified(path, &passphrase)?;
        return journal.ok_or_else(|| {
            CliError::auth_failed_with_hint(
                "Incorrect passphrase.",
                "Check the value of DAYBOOK_PASSPHRASE.",
            )
            .into()
        });
    }

    let interactive = std::io::stdin().is_terminal() && !no_input;
    let max_attempts = if interactive { MAX_PASSPHRASE_ATTEMPTS } else { 1 };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let passphrase = prompt_passphrase(interactive)?;
        if let Some(journal) = open_verified(path, &passphrase)? {
            return Ok(journal);
        }

        let remaining = max_attempts.saturating_sub(attempts);
        tracing::info!(attempts, remaining, "passphrase rejected");
        if remaining == 0 {
            return Err(CliError::auth_failed_with_hint(
                "Too many failed passphrase attempts.",
                "If you forgot your passphrase, the journal cannot be recovered. Backups use the same passphrase.",
            )
            .into());
        }
        eprintln!(
            "Incorrect passphrase. {} attempt{} remaining.",
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
    }
}

/// Open and test the password. `Ok(None)` means the password was wrong.
///
/// A failed `test_password` only proves the earliest entry is unreadable, so
/// the remaining entries are tried before the password is rejected.
fn open_verified(path: &Path, passphrase: &str) -> anyhow::Result<Option<Journal>> {
    let journal = match Journal::open(path, passphrase) {
        Ok(journal) => journal,
        Err(DaybookError::JournalNotFound(_)) => return Err(missing_journal(path).into()),
        Err(err) => return Err(err.into()),
    };
    tracing::debug!(path = %path.display(), entries = journal.len(), "journal opened");

    if journal.test_password() {
        return Ok(Some(journal));
    }

    let verified_by = journal
        .entry_dates()
        .skip(1)
        .find(|date| journal.get_entry(*date).is_ok());
    match verified_by {
        Some(date) => {
            tracing::warn!(
                verified_by = %date,
                "earliest entry does not decrypt; run `daybook check`"
            );
            Ok(Some(journal))
        }
        None => Ok(None),
    }
}
