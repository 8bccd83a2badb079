use std::io::IsTerminal;

use chrono::{Datelike, NaiveDate};
use dialoguer::Confirm;

use daybook_core::storage::format_date_key;
use daybook_core::Journal;

use crate::app::AppContext;
use crate::cli::{ListArgs, RemoveArgs, ShowArgs, WriteArgs};
use crate::errors::CliError;
use crate::helpers::{parse_date_arg, read_entry_body};
use crate::output::{dates_json, entry_json, print_json};
use crate::ui::{badge, header, print, receipt, simple_table, Badge, Column, UiContext};

pub fn handle_write(ctx: &AppContext, args: &WriteArgs) -> anyhow::Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let mut journal = ctx.open_journal(args.no_input)?;

    let existing = if args.body.is_none() && std::io::stdin().is_terminal() {
        journal.get_entry(date)?
    } else {
        None
    };
    let body = read_entry_body(
        args.no_input,
        args.body.clone(),
        ctx.editor()?,
        existing.as_deref(),
    )?;

    journal.add_entry(date, &body)?;
    journal.save()?;
    tracing::info!(date = %date, removed = body.trim().is_empty(), "entry written");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let key = format_date_key(date);
        let title = if body.trim().is_empty() {
            "Entry removed"
        } else {
            "Entry saved"
        };
        print(&ui_ctx, &receipt(&ui_ctx, title, &[("Date", &key)]));
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let journal = ctx.open_journal(false)?;
    let ui_ctx = ctx.ui_context(args.json, None);
    print_entry(&ui_ctx, &journal, date)
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let since = args
        .since
        .as_deref()
        .map(|value| parse_date_arg(Some(value)))
        .transpose()?;
    let until = args
        .until
        .as_deref()
        .map(|value| parse_date_arg(Some(value)))
        .transpose()?;

    let journal = ctx.open_journal(false)?;
    let dates: Vec<NaiveDate> = match (since, until) {
        (None, None) => journal.entry_dates().collect(),
        (start, end) => {
            let start = start.unwrap_or(NaiveDate::MIN);
            let end = end.unwrap_or(NaiveDate::MAX);
            journal
                .entries_between(start, end)
                .map_err(|e| CliError::invalid_input(e.to_string()))?
        }
    };

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        return print_json(&dates_json(&dates));
    }

    if dates.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "No entries"));
        }
        return Ok(());
    }

    if !ctx.quiet() {
        let path = journal.path().display().to_string();
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&path)));
    }
    let columns = [Column::new("Date"), Column::new("Weekday")];
    let rows: Vec<Vec<String>> = dates
        .iter()
        .map(|date| vec![format_date_key(*date), date.weekday().to_string()])
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let date = parse_date_arg(Some(&args.date))?;
    let mut journal = ctx.open_journal(args.yes)?;
    let key = format_date_key(date);

    if !journal.has_date(date) {
        return Err(CliError::not_found(
            format!("No entry for {}", key),
            "Run `daybook list` to see entry dates.",
        )
        .into());
    }

    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::invalid_input("Refusing to remove without --yes").into());
        }
        let proceed = Confirm::new()
            .with_prompt(format!("Remove the entry for {}?", key))
            .default(false)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Remove cancelled"));
        }
    }

    journal.remove_entry(date);
    journal.save()?;
    tracing::info!(date = %date, "entry removed");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(&ui_ctx, &receipt(&ui_ctx, "Entry removed", &[("Date", &key)]));
    }
    Ok(())
}

/// Print the entry for `date`, or fail with a not-found error.
pub fn print_entry(ui_ctx: &UiContext, journal: &Journal, date: NaiveDate) -> anyhow::Result<()> {
    let key = format_date_key(date);
    let text = journal.get_entry(date)?.ok_or_else(|| {
        CliError::not_found(
            format!("No entry for {}", key),
            "Run `daybook list` to see entry dates.",
        )
    })?;

    if ui_ctx.mode.is_json() {
        return print_json(&entry_json(date, &text));
    }

    if ui_ctx.mode.is_pretty() {
        let title = format!("{} ({})", key, date.weekday());
        print(ui_ctx, &header(ui_ctx, &title, None));
        println!();
    }
    println!("{}", text);
    Ok(())
}
