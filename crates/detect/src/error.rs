//! Error types for the mhw-detect crate.

use mhw_calendar::CalendarError;

/// Error type for all fallible operations in the mhw-detect crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectError {
    /// Returned when the series has no days.
    #[error("input series is empty")]
    EmptyData,

    /// Returned when days and temperatures differ in length.
    #[error("length mismatch: {days} days but {temperature} temperatures")]
    LengthMismatch {
        /// Number of days.
        days: usize,
        /// Number of temperatures.
        temperature: usize,
    },

    /// Returned when the threshold percentile is outside 0..=100.
    #[error("invalid percentile: {value} (must be in 0..=100)")]
    InvalidPercentile {
        /// The rejected percentile.
        value: f64,
    },

    /// Returned when the minimum event duration is zero.
    #[error("minimum duration must be at least 1 day")]
    InvalidMinDuration,

    /// Returned when smoothing is enabled with a zero-width window.
    #[error("smoothing width must be at least 1 day")]
    InvalidSmoothingWidth,

    /// Returned when no finite baseline value falls inside the reference period.
    #[error("no baseline data between {start} and {end}")]
    EmptyClimatology {
        /// First year of the resolved reference period.
        start: i32,
        /// Last year of the resolved reference period.
        end: i32,
    },

    /// A day could not be placed on the calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_percentile() {
        let e = DetectError::InvalidPercentile { value: 120.0 };
        assert_eq!(e.to_string(), "invalid percentile: 120 (must be in 0..=100)");
    }

    #[test]
    fn display_empty_climatology() {
        let e = DetectError::EmptyClimatology {
            start: 2030,
            end: 2031,
        };
        assert_eq!(e.to_string(), "no baseline data between 2030 and 2031");
    }

    #[test]
    fn display_length_mismatch() {
        let e = DetectError::LengthMismatch {
            days: 3,
            temperature: 2,
        };
        assert_eq!(e.to_string(), "length mismatch: 3 days but 2 temperatures");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DetectError>();
    }
}
