//! Entry-to-entry navigation.
//!
//! `next` and `prev` hand back the starting date when no entry lies in that
//! direction, so repeated calls settle at either end of the journal.

use chrono::NaiveDate;

use daybook_core::storage::format_date_key;
use daybook_core::Journal;

use crate::app::AppContext;
use crate::cli::{EdgeArgs, NavigateArgs};
use crate::commands::entries::print_entry;
use crate::errors::CliError;
use crate::helpers::parse_date_arg;

pub fn handle_next(ctx: &AppContext, args: &NavigateArgs) -> anyhow::Result<()> {
    let from = parse_date_arg(args.date.as_deref())?;
    let journal = ctx.open_journal(false)?;
    let date = journal.next_entry_date(from);
    report(ctx, &journal, date, args.show)
}

pub fn handle_prev(ctx: &AppContext, args: &NavigateArgs) -> anyhow::Result<()> {
    let from = parse_date_arg(args.date.as_deref())?;
    let journal = ctx.open_journal(false)?;
    let date = journal.previous_entry_date(from);
    report(ctx, &journal, date, args.show)
}

pub fn handle_first(ctx: &AppContext, args: &EdgeArgs) -> anyhow::Result<()> {
    let journal = ctx.open_journal(false)?;
    let date = journal.first_entry_date().ok_or_else(empty_journal)?;
    report(ctx, &journal, date, args.show)
}

pub fn handle_last(ctx: &AppContext, args: &EdgeArgs) -> anyhow::Result<()> {
    let journal = ctx.open_journal(false)?;
    let date = journal.last_entry_date().ok_or_else(empty_journal)?;
    report(ctx, &journal, date, args.show)
}

fn report(ctx: &AppContext, journal: &Journal, date: NaiveDate, show: bool) -> anyhow::Result<()> {
    if show && journal.has_date(date) {
        return print_entry(&ctx.ui_context(false, None), journal, date);
    }
    println!("{}", format_date_key(date));
    Ok(())
}

fn empty_journal() -> CliError {
    CliError::not_found(
        "The journal has no entries",
        "Run `daybook write` to add the first one.",
    )
}
