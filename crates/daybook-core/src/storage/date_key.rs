//! Canonical `yyyy-MM-dd` date keys.
//!
//! Zero-padded ISO dates sort lexicographically in chronological order, which
//! is what lets the file stay a plain sorted text map.

use chrono::{Datelike, NaiveDate};

use crate::error::{DaybookError, Result};

/// `chrono` format string for a date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Years a four-digit key can hold.
pub const KEY_YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Reject dates whose key would not be a plain four-digit `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `DaybookError::InvalidArgument` if the year is outside 0..=9999.
pub fn ensure_key_range(date: NaiveDate) -> Result<()> {
    if KEY_YEAR_RANGE.contains(&date.year()) {
        Ok(())
    } else {
        Err(DaybookError::InvalidArgument(format!(
            "Date {} is outside the supported years 0000-9999",
            date
        )))
    }
}

/// Render a date as its storage key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a storage key back into a date.
///
/// Only the canonical form is accepted: `2024-01-05` parses, `2024-1-5` and
/// `+2024-01-05` do not.
///
/// # Errors
///
/// Returns `DaybookError::InvalidArgument` if `value` is not a canonical date key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).map_err(|e| {
        DaybookError::InvalidArgument(format!("Invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
    })?;
    if format_date_key(date) != value {
        return Err(DaybookError::InvalidArgument(format!(
            "Date '{}' is not in canonical YYYY-MM-DD form",
            value
        )));
    }
    Ok(date)
}
