use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use daybook_core::storage::format_date_key;
use daybook_core::DaybookError;

use crate::app::{missing_journal, AppContext};
use crate::cli::{BackupArgs, CheckArgs};
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge, ProgressBar};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let journal = ctx.open_journal(args.no_input)?;
    let ui_ctx = ctx.ui_context(false, None);

    let progress = ProgressBar::new(&ui_ctx, journal.len() as u64, "Decrypting");
    let mut failed: Vec<(String, DaybookError)> = Vec::new();
    for date in journal.entry_dates() {
        if let Err(err) = journal.get_entry(date) {
            tracing::warn!(date = %date, error = %err, "entry failed to decrypt");
            failed.push((format_date_key(date), err));
        }
        progress.inc(1);
    }
    progress.finish();

    let total = journal.len();
    let readable = total - failed.len();
    if failed.is_empty() {
        if !ctx.quiet() {
            let readable = readable.to_string();
            print(
                &ui_ctx,
                &receipt(
                    &ui_ctx,
                    "Integrity check passed",
                    &[("Entries", &readable), ("Failed", "0")],
                ),
            );
        }
        return Ok(());
    }

    for (key, err) in &failed {
        eprintln!("{}", badge(&ui_ctx, Badge::Warn, &format!("{}: {}", key, err)));
    }
    Err(CliError::integrity_failed(format!(
        "Integrity check failed: {} of {} entries could not be decrypted",
        failed.len(),
        total
    ))
    .into())
}

pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let source = ctx.journal_path()?;
    if !source.exists() {
        return Err(missing_journal(&source).into());
    }
    let destination = Path::new(&args.destination);
    let count = backup_atomic_copy(&source, destination)?;
    tracing::info!(bytes = count, destination = %destination.display(), "backup written");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let bytes = count.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Backup written",
                &[("Destination", &args.destination), ("Bytes", &bytes)],
            ),
        );
    }
    Ok(())
}

/// Copy `source` next to `destination` and rename it into place.
fn backup_atomic_copy(source: &Path, destination: &Path) -> anyhow::Result<u64> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create backup destination directory {}: {}",
            parent.display(),
            e
        )
    })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let temp_path = parent.join(format!(".daybook-backup-{}.tmp", nanos));

    let bytes = std::fs::copy(source, &temp_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        anyhow::anyhow!(
            "Failed to copy journal from {} to backup destination {}: {}",
            source.display(),
            destination.display(),
            e
        )
    })?;

    if let Err(err) = std::fs::rename(&temp_path, destination) {
        let _ = std::fs::remove_file(destination);
        std::fs::rename(&temp_path, destination).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            anyhow::anyhow!("Atomic rename failed ({}): {}", err, e)
        })?;
    }

    Ok(bytes)
}
