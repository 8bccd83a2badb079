//! Parsing helpers for date arguments.

use chrono::{Days, Local, NaiveDate};

use daybook_core::storage::{ensure_key_range, parse_date_key};

use crate::errors::CliError;

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date argument relative to `today`.
///
/// Accepts `today`, `yesterday`, `tomorrow` or a canonical `YYYY-MM-DD` date.
/// A missing argument means `today`.
pub fn parse_date_arg_from(value: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let Some(raw) = value else {
        return Ok(today);
    };
    let shifted = match raw.trim().to_lowercase().as_str() {
        "today" => Some(today),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        _ => {
            return parse_date_key(raw.trim()).map_err(|_| {
                CliError::invalid_input(format!(
                    "Invalid date '{}' (expected YYYY-MM-DD, today, yesterday or tomorrow)",
                    raw
                ))
                .into()
            })
        }
    };
    let date = shifted
        .filter(|date| ensure_key_range(*date).is_ok())
        .ok_or_else(|| CliError::invalid_input(format!("Date '{}' is out of range", raw)))?;
    Ok(date)
}

/// Parse a date argument relative to the local date.
pub fn parse_date_arg(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    parse_date_arg_from(value, today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_means_today() {
        let today = day(2024, 3, 1);
        assert_eq!(parse_date_arg_from(None, today).unwrap(), today);
    }

    #[test]
    fn test_relative_words() {
        let today = day(2024, 3, 1);
        assert_eq!(parse_date_arg_from(Some("today"), today).unwrap(), today);
        assert_eq!(
            parse_date_arg_from(Some("Yesterday"), today).unwrap(),
            day(2024, 2, 29)
        );
        assert_eq!(
            parse_date_arg_from(Some("tomorrow"), today).unwrap(),
            day(2024, 3, 2)
        );
    }

    #[test]
    fn test_explicit_date() {
        let parsed = parse_date_arg_from(Some("2023-12-31"), day(2024, 3, 1)).unwrap();
        assert_eq!(parsed, day(2023, 12, 31));
    }

    #[test]
    fn test_tomorrow_past_year_9999_is_rejected() {
        let err = parse_date_arg_from(Some("tomorrow"), day(9999, 12, 31)).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), crate::constants::exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_invalid_date_is_invalid_input() {
        let err = parse_date_arg_from(Some("2023-02-30"), day(2024, 3, 1)).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), crate::constants::exit_codes::INVALID_INPUT);
    }
}
