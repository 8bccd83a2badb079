//! Path resolution for config and journal files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, DaybookConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking DAYBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the journal file path from CLI args or config.
pub fn resolve_journal_path(cli: &Cli, config: Option<&DaybookConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.journal.as_deref() {
        tracing::debug!(path, "journal path from --journal/DAYBOOK_PATH");
        return Ok(PathBuf::from(path));
    }

    match config {
        Some(config) => {
            tracing::debug!(path = %config.journal.path, "journal path from config");
            Ok(PathBuf::from(&config.journal.path))
        }
        None => {
            let config_path = resolve_config_path()?;
            Err(CliError::not_found(
                format!("No journal configured (no config at {})", config_path.display()),
                missing_journal_hint(),
            )
            .into())
        }
    }
}

/// Error raised when the journal file is missing.
pub fn missing_journal(path: &Path) -> CliError {
    CliError::not_found(
        format!("No journal found at {}", path.display()),
        missing_journal_hint(),
    )
}

fn missing_journal_hint() -> String {
    "Run `daybook init`, or point at a journal with DAYBOOK_PATH=/path/to/journal.daybook"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["daybook", "--journal", "/tmp/a.daybook", "list"]).unwrap();
        let config = DaybookConfig::new(Path::new("/tmp/b.daybook"), None);
        let path = resolve_journal_path(&cli, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/a.daybook"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let mut cli = Cli::try_parse_from(["daybook", "list"]).unwrap();
        cli.journal = None;
        let config = DaybookConfig::new(Path::new("/tmp/b.daybook"), None);
        let path = resolve_journal_path(&cli, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/b.daybook"));
    }

    #[test]
    fn test_missing_journal_is_not_found() {
        let err = missing_journal(Path::new("/nope.daybook"));
        assert_eq!(err.exit_code(), crate::constants::exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("/nope.daybook"));
    }
}
