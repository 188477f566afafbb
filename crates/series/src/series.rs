//! The canonical `(days, temperature)` store.

use mhw_calendar::iso_from_ordinal;
use serde::Serialize;
use tracing::debug;

use crate::error::SeriesError;
use crate::normalize::{DateInput, normalize_days};

/// A run of missing days between two stored days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// Last stored day before the hole.
    pub after: i64,
    /// First stored day after the hole.
    pub before: i64,
    /// Number of missing days.
    pub missing: i64,
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of days appended.
    pub appended: usize,
    /// Missing days left between the old series and the new block.
    pub gap: i64,
}

/// Daily temperature series on strictly increasing ordinal days.
///
/// Always non-empty, and `days` and `temperature` always have equal length.
/// The series only grows by appending blocks that start after its last day.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    days: Vec<i64>,
    temperature: Vec<f64>,
}

impl TimeSeries {
    /// Normalises `input` and stores it with `temperature`.
    ///
    /// # Errors
    ///
    /// Any error from [`normalize_days`].
    pub fn new(input: &DateInput, temperature: Vec<f64>) -> Result<Self, SeriesError> {
        let days = normalize_days(input, temperature.len())?;
        Ok(Self { days, temperature })
    }

    /// Appends a new block after the current last day.
    ///
    /// With `gap = first new day - last day - 1`, the block is rejected when
    /// it overlaps (`gap < 0`), when any gap is present and
    /// `max_allowed_gap == 0`, or when `gap > max_allowed_gap`. Tolerated
    /// holes stay holes. On error `self` is unchanged.
    ///
    /// # Errors
    ///
    /// [`SeriesError::Overlap`], [`SeriesError::NonContiguous`],
    /// [`SeriesError::GapTooLarge`], or any error from [`normalize_days`].
    #[tracing::instrument(
        skip_all,
        fields(max_allowed_gap = max_allowed_gap, last_day = self.last_day())
    )]
    pub fn merge(
        &mut self,
        input: &DateInput,
        temperature: Vec<f64>,
        max_allowed_gap: usize,
    ) -> Result<MergeReport, SeriesError> {
        let days = normalize_days(input, temperature.len())?;
        let gap = self.check_gap(days[0], max_allowed_gap)?;

        let appended = days.len();
        self.days.extend(days);
        self.temperature.extend(temperature);
        debug!(appended, gap, total = self.days.len(), "merged block");
        Ok(MergeReport { appended, gap })
    }

    /// Same as [`merge`](Self::merge) but returns the merged series and
    /// leaves `self` alone.
    ///
    /// # Errors
    ///
    /// Same as [`merge`](Self::merge).
    pub fn merged(
        &self,
        input: &DateInput,
        temperature: Vec<f64>,
        max_allowed_gap: usize,
    ) -> Result<Self, SeriesError> {
        let mut out = self.clone();
        out.merge(input, temperature, max_allowed_gap)?;
        Ok(out)
    }

    fn check_gap(&self, first_day: i64, max_allowed_gap: usize) -> Result<i64, SeriesError> {
        let last_day = self.last_day();
        let gap = first_day - last_day - 1;
        if gap < 0 {
            return Err(SeriesError::Overlap {
                last_day,
                first_day,
            });
        }
        if max_allowed_gap == 0 && gap != 0 {
            return Err(SeriesError::NonContiguous {
                expected_start: last_day + 1,
                gap,
            });
        }
        if i64::try_from(max_allowed_gap).is_ok_and(|max| gap > max) {
            return Err(SeriesError::GapTooLarge {
                gap,
                max_allowed: max_allowed_gap,
            });
        }
        Ok(gap)
    }

    /// Returns the ordinal days.
    pub fn days(&self) -> &[i64] {
        &self.days
    }

    /// Returns the temperatures.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Returns the number of stored days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Never `true` for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the first ordinal day.
    pub fn first_day(&self) -> i64 {
        self.days[0]
    }

    /// Returns the last ordinal day.
    pub fn last_day(&self) -> i64 {
        self.days[self.days.len() - 1]
    }

    /// Returns the first and last day as ISO strings.
    ///
    /// # Errors
    ///
    /// [`SeriesError::Calendar`] if a stored ordinal has no calendar date.
    pub fn iso_bounds(&self) -> Result<(String, String), SeriesError> {
        Ok((
            iso_from_ordinal(self.first_day())?,
            iso_from_ordinal(self.last_day())?,
        ))
    }

    /// Lists every hole in the series, in order.
    pub fn gaps(&self) -> Vec<Gap> {
        self.days
            .windows(2)
            .filter(|w| w[1] - w[0] > 1)
            .map(|w| Gap {
                after: w[0],
                before: w[1],
                missing: w[1] - w[0] - 1,
            })
            .collect()
    }

    /// Consumes the series and returns its parts.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.days, self.temperature)
    }
}
