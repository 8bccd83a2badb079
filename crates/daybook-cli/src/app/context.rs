//! Application context for the Daybook CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use daybook_core::Journal;

use crate::cli::Cli;
use crate::config::{read_config, DaybookConfig};
use crate::ui::UiContext;

use super::passphrase::open_journal_with_retry;
use super::resolver::{resolve_config_path, resolve_journal_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DaybookConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file, loading it lazily. `None` when no config exists.
    pub fn config(&self) -> anyhow::Result<Option<&DaybookConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok::<_, anyhow::Error>(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Get the configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.and_then(|c| c.ui.editor.as_deref()))
    }

    /// Resolve the journal path from flags, environment and config.
    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        resolve_journal_path(self.cli, self.config()?)
    }

    /// Open the journal with passphrase handling and retry logic.
    pub fn open_journal(&self, no_input: bool) -> anyhow::Result<Journal> {
        let path = self.journal_path()?;
        open_journal_with_retry(&path, no_input)
    }

    /// Build a UI context honoring `--no-color`.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }
}
