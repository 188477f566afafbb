//! Date input shapes and their normalisation to ordinal days.

use mhw_calendar::{date_from_ordinal, ordinal_from_iso, ordinal_range};
use serde::Deserialize;

use crate::error::SeriesError;

/// The two accepted ways of describing the days of a block.
///
/// Deserializes from either a pair of ISO strings (`["2020-01-01",
/// "2020-01-05"]`) or an array of ordinal days.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Inclusive ISO `YYYY-MM-DD` start and end dates.
    Range(String, String),
    /// Explicit ordinal days.
    Ordinals(Vec<i64>),
}

impl DateInput {
    /// Convenience constructor for an ISO range.
    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::Range(start.into(), end.into())
    }
}

impl From<Vec<i64>> for DateInput {
    fn from(days: Vec<i64>) -> Self {
        Self::Ordinals(days)
    }
}

impl From<(&str, &str)> for DateInput {
    fn from((start, end): (&str, &str)) -> Self {
        Self::range(start, end)
    }
}

/// Resolves `input` into strictly increasing ordinal days.
///
/// An ISO range expands to every day from start to end inclusive; ordinals
/// are passed through unchanged once checked. Ordinals must lie on the
/// calendar (`1` is 0001-01-01), which keeps day differences far from
/// `i64` overflow.
///
/// # Errors
///
/// - [`SeriesError::Calendar`] if an ISO string is malformed or an ordinal
///   has no calendar date.
/// - [`SeriesError::InvalidRange`] if the range end is not after its start.
/// - [`SeriesError::EmptyData`] if there are no days.
/// - [`SeriesError::NotIncreasing`] if ordinals are not strictly increasing.
/// - [`SeriesError::LengthMismatch`] if the day count differs from
///   `temperature_len`.
pub fn normalize_days(input: &DateInput, temperature_len: usize) -> Result<Vec<i64>, SeriesError> {
    let days = match input {
        DateInput::Range(start, end) => {
            let lo = ordinal_from_iso(start)?;
            let hi = ordinal_from_iso(end)?;
            if hi <= lo {
                return Err(SeriesError::InvalidRange {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
            ordinal_range(lo, hi)
        }
        DateInput::Ordinals(days) => {
            check_increasing(days)?;
            check_in_calendar(days)?;
            days.clone()
        }
    };

    if days.is_empty() {
        return Err(SeriesError::EmptyData);
    }
    if days.len() != temperature_len {
        return Err(SeriesError::LengthMismatch {
            days: days.len(),
            temperature: temperature_len,
        });
    }
    Ok(days)
}

/// Every ordinal must name a calendar date. Increasing order means only the
/// ends need checking.
fn check_in_calendar(days: &[i64]) -> Result<(), SeriesError> {
    if let (Some(&first), Some(&last)) = (days.first(), days.last()) {
        date_from_ordinal(first)?;
        date_from_ordinal(last)?;
    }
    Ok(())
}

fn check_increasing(days: &[i64]) -> Result<(), SeriesError> {
    match days.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(SeriesError::NotIncreasing {
            index: i + 1,
            previous: days[i],
            current: days[i + 1],
        }),
        None => Ok(()),
    }
}
