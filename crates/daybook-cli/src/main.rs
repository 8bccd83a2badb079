//! Daybook CLI - an encrypted, date-keyed personal journal
//!
//! This is the command-line interface for Daybook. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, maintenance, misc, navigate};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (code, hint) = match e.downcast_ref::<CliError>() {
            Some(cli_err) => (cli_err.exit_code(), cli_err.hint().map(str::to_string)),
            None => (1, extract_error_hint(&e)),
        };
        tracing::debug!(error = ?e, code, "command failed");
        print_error(&ui_ctx, &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

/// Provide contextual hints for errors that did not carry one.
fn extract_error_hint(error: &anyhow::Error) -> Option<String> {
    if let Some(core_err) = error.downcast_ref::<daybook_core::DaybookError>() {
        if core_err.is_io() {
            return Some(
                "Hint: Check that the journal path exists and is writable, or run `daybook init`."
                    .to_string(),
            );
        }
        if core_err.is_decryption_failure() {
            return Some("Hint: Run `daybook check` to find damaged entries.".to_string());
        }
    }

    let error_lower = error.to_string().to_lowercase();
    if error_lower.contains("backup") && error_lower.contains("destination") {
        return Some(
            "Hint: Ensure the destination path is writable and the parent directory exists."
                .to_string(),
        );
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Write(args)) => entries::handle_write(ctx, args),
        Some(Commands::Show(args)) => entries::handle_show(ctx, args),
        Some(Commands::List(args)) => entries::handle_list(ctx, args),
        Some(Commands::Remove(args)) => entries::handle_remove(ctx, args),
        Some(Commands::Next(args)) => navigate::handle_next(ctx, args),
        Some(Commands::Prev(args)) => navigate::handle_prev(ctx, args),
        Some(Commands::First(args)) => navigate::handle_first(ctx, args),
        Some(Commands::Last(args)) => navigate::handle_last(ctx, args),
        Some(Commands::Check(args)) => maintenance::handle_check(ctx, args),
        Some(Commands::Backup(args)) => maintenance::handle_backup(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            misc::print_quickstart(&ctx.ui_context(false, None));
            Ok(())
        }
    }
}
