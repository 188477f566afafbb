//! Conversions between ISO-8601 strings, calendar dates and ordinal days.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Parses a `YYYY-MM-DD` string into an ordinal day.
///
/// Years before 1 are rejected: the ordinal axis starts at 0001-01-01.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidIsoDate`] if the string is not a valid
/// calendar date in `YYYY-MM-DD` form.
pub fn ordinal_from_iso(input: &str) -> Result<i64, CalendarError> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CalendarError::InvalidIsoDate {
            input: input.to_string(),
        }
    })?;
    if date.year() < 1 {
        return Err(CalendarError::InvalidIsoDate {
            input: input.to_string(),
        });
    }
    Ok(ordinal_from_date(date))
}

/// Returns the ordinal day of a calendar date (0001-01-01 is day 1).
pub fn ordinal_from_date(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Converts an ordinal day back into a calendar date.
///
/// # Errors
///
/// Returns [`CalendarError::OrdinalOutOfRange`] if `ordinal < 1` or the
/// value exceeds the range chrono can represent.
pub fn date_from_ordinal(ordinal: i64) -> Result<NaiveDate, CalendarError> {
    if ordinal < 1 {
        return Err(CalendarError::OrdinalOutOfRange { ordinal });
    }
    i32::try_from(ordinal)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(CalendarError::OrdinalOutOfRange { ordinal })
}

/// Formats an ordinal day as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`CalendarError::OrdinalOutOfRange`] if the ordinal has no date.
pub fn iso_from_ordinal(ordinal: i64) -> Result<String, CalendarError> {
    Ok(date_from_ordinal(ordinal)?.format("%Y-%m-%d").to_string())
}
