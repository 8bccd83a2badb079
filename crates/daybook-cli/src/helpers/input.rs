//! Input handling helpers for passphrase and entry body reading.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::Password;
use zeroize::Zeroizing;

use daybook_core::crypto::validate_passphrase;

use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

/// Read the passphrase from `DAYBOOK_PASSPHRASE`, if set and non-blank.
pub fn passphrase_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(Zeroizing::new)
}

/// Prompt for the passphrase of an existing journal.
pub fn prompt_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if !interactive {
        return Err(CliError::auth_failed_with_hint(
            "No passphrase provided and no TTY available.",
            format!("Set {} to unlock the journal non-interactively.", PASSPHRASE_ENV),
        )
        .into());
    }
    Password::new()
        .with_prompt("Passphrase")
        .allow_empty_password(true)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

/// Prompt for a new passphrase with confirmation (for init), or read it from the environment.
pub fn prompt_new_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = passphrase_from_env() {
        validate_passphrase(&value).map_err(|e| {
            CliError::invalid_input(format!("Passphrase does not meet requirements: {}", e))
        })?;
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into());
    }
    loop {
        let passphrase = Password::new()
            .with_prompt("Enter passphrase")
            .with_confirmation("Confirm passphrase", "Passphrases do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
        if let Err(err) = validate_passphrase(&passphrase) {
            eprintln!("Passphrase does not meet requirements: {}", err);
            continue;
        }
        return Ok(passphrase);
    }
}

/// Read entry body from --body flag, stdin, or $EDITOR.
///
/// A blank result is returned as-is; storing it removes the entry.
pub fn read_entry_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(CliError::invalid_input(
                "No input provided on stdin; use --body \"\" to remove an entry",
            )
            .into());
        }
        return Ok(trimmed);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires --body or content on stdin").into());
    }

    read_body_from_editor(editor_override, initial_body)
}

/// Open $EDITOR to compose entry body.
fn read_body_from_editor(
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    let editor = editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("EDITOR").ok())
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("daybook_entry_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    let initial = initial_body.unwrap_or("");
    std::fs::write(&path, initial)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(&editor).arg(&path).status();
    let status = match status {
        Ok(status) => status,
        Err(e) => {
            let _ = std::fs::remove_file(&path);
            return Err(anyhow::anyhow!("Failed to launch editor '{}': {}", editor, e));
        }
    };
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e));
    let _ = std::fs::remove_file(&path);

    Ok(contents?.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_flag_wins() {
        let body = read_entry_body(true, Some("hello".to_string()), None, None).unwrap();
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_blank_body_flag_is_kept() {
        let body = read_entry_body(true, Some("   ".to_string()), None, None).unwrap();
        assert!(body.trim().is_empty());
    }

    #[test]
    fn test_non_interactive_prompt_is_auth_failure() {
        let err = prompt_passphrase(false).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), crate::constants::exit_codes::AUTH_FAILED);
    }
}
