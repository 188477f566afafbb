//! Error types for the mhw-calendar crate.

/// Error type for all fallible operations in the mhw-calendar crate.
///
/// Covers malformed ISO-8601 date strings and ordinal values that fall
/// outside the range representable as a calendar date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not a valid `YYYY-MM-DD` date.
    #[error("invalid ISO date: {input:?} (expected YYYY-MM-DD)")]
    InvalidIsoDate {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when an ordinal day cannot be mapped to a calendar date.
    #[error("ordinal day {ordinal} is outside the representable date range")]
    OrdinalOutOfRange {
        /// The offending ordinal day.
        ordinal: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_iso_date() {
        let err = CalendarError::InvalidIsoDate {
            input: "2020-13-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ISO date: \"2020-13-01\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_ordinal_out_of_range() {
        let err = CalendarError::OrdinalOutOfRange { ordinal: 0 };
        assert_eq!(
            err.to_string(),
            "ordinal day 0 is outside the representable date range"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::OrdinalOutOfRange { ordinal: -1 };
        let b = CalendarError::OrdinalOutOfRange { ordinal: -1 };
        assert_eq!(a, b);

        let c = CalendarError::OrdinalOutOfRange { ordinal: -2 };
        assert_ne!(a, c);
    }
}
