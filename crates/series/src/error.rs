//! Error types for the mhw-series crate.

use mhw_calendar::CalendarError;

/// Error type for all fallible operations in the mhw-series crate.
///
/// Every variant is raised before any state is touched, so a failed
/// construction or merge never leaves a partially-updated series behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a block has no days at all.
    #[error("series block is empty")]
    EmptyData,

    /// Returned when an ISO range does not run forward in time.
    #[error("invalid date range: end {end} must be after start {start}")]
    InvalidRange {
        /// ISO start date as supplied.
        start: String,
        /// ISO end date as supplied.
        end: String,
    },

    /// Returned when the resolved days and the temperatures differ in length.
    #[error("length mismatch: {days} days but {temperature} temperatures")]
    LengthMismatch {
        /// Number of resolved days.
        days: usize,
        /// Number of temperature values.
        temperature: usize,
    },

    /// Returned when an ordinal sequence is not strictly increasing.
    #[error("days must be strictly increasing: day {current} at index {index} follows {previous}")]
    NotIncreasing {
        /// Index of the offending element.
        index: usize,
        /// Ordinal day preceding it.
        previous: i64,
        /// The offending ordinal day.
        current: i64,
    },

    /// Returned when a new block starts on or before the last stored day.
    #[error("new block starting at day {first_day} overlaps series ending at day {last_day}")]
    Overlap {
        /// Last ordinal day of the stored series.
        last_day: i64,
        /// First ordinal day of the new block.
        first_day: i64,
    },

    /// Returned when a contiguous append was required but the block leaves a gap.
    #[error("new block must start at day {expected_start} (gap of {gap} days not allowed)")]
    NonContiguous {
        /// The ordinal day the block was required to start on.
        expected_start: i64,
        /// Number of missing days between the series and the block.
        gap: i64,
    },

    /// Returned when the gap before a new block exceeds the tolerated bound.
    #[error("gap of {gap} days exceeds the allowed maximum of {max_allowed}")]
    GapTooLarge {
        /// Number of missing days between the series and the block.
        gap: i64,
        /// The tolerated bound.
        max_allowed: usize,
    },

    /// A date string or ordinal could not be converted.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
