//! Error types for the mhw-synth crate.

use mhw_calendar::CalendarError;

/// Error type for all fallible operations in the mhw-synth crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when a generator setting is unusable.
    #[error("invalid synth config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the end date is not after the start date.
    #[error("invalid date range: end {end} must be after start {start}")]
    InvalidRange {
        /// ISO start date as supplied.
        start: String,
        /// ISO end date as supplied.
        end: String,
    },

    /// A date string could not be parsed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
