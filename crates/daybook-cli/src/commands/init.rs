use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Confirm;

use daybook_core::Journal;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_journal_path, write_config, DaybookConfig};
use crate::errors::CliError;
use crate::helpers::prompt_new_passphrase;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let target = match args.path.as_deref().or(ctx.cli().journal.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };
    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let config_path = resolve_config_path()?;
    let editor = ctx.editor()?.map(str::to_string);

    if target.exists() && !args.force {
        if !interactive {
            return Err(CliError::invalid_input(format!(
                "A journal already exists at {}; pass --force to overwrite it",
                target.display()
            ))
            .into());
        }
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Overwrite the existing journal at {}? All entries will be lost",
                target.display()
            ))
            .default(false)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Init cancelled"));
        }
    }

    let passphrase = prompt_new_passphrase(interactive)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create journal directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let journal = Journal::create(&target, &passphrase)?;
    tracing::info!(path = %journal.path().display(), "journal created");

    write_config(&config_path, &DaybookConfig::new(journal.path(), editor))?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let journal_display = journal.path().display().to_string();
        let config_display = config_path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Journal created",
                &[("Journal", &journal_display), ("Config", &config_display)],
            ),
        );
        print(&ui_ctx, &hint(&ui_ctx, "daybook write --body \"First entry\""));
    }
    Ok(())
}
