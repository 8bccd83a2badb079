//! JSON output helpers for entries and date lists.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use daybook_core::storage::format_date_key;

#[derive(Debug, Serialize)]
pub struct EntryJson {
    pub date: String,
    pub weekday: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DateListJson {
    pub count: usize,
    pub dates: Vec<String>,
}

/// Convert an entry to JSON for output.
pub fn entry_json(date: NaiveDate, text: &str) -> EntryJson {
    EntryJson {
        date: format_date_key(date),
        weekday: date.weekday().to_string(),
        text: text.to_string(),
    }
}

/// Convert a list of entry dates to JSON for output.
pub fn dates_json(dates: &[NaiveDate]) -> DateListJson {
    DateListJson {
        count: dates.len(),
        dates: dates.iter().copied().map(format_date_key).collect(),
    }
}

/// Print a serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to render JSON: {}", e))?;
    println!("{}", rendered);
    Ok(())
}
