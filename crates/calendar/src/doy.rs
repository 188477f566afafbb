//! Day-of-year axes for seasonal climatologies.

use chrono::{Datelike, NaiveDate};

/// Day-of-year of February 29 on a leap-year axis.
const FEB_29_DOY: u32 = 60;

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// How calendar dates are folded onto a fixed-length seasonal cycle.
///
/// `Leap` keeps a dedicated slot for February 29 so that every other date
/// lands on the same slot in leap and non-leap years. `NoLeap` folds
/// February 29 onto February 28 and yields a 365-slot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayAxis {
    /// 366 slots; non-leap years skip slot 59 (February 29).
    Leap,
    /// 365 slots; February 29 shares the February 28 slot.
    NoLeap,
}

impl DayAxis {
    /// Number of slots in one seasonal cycle.
    pub fn slots(self) -> usize {
        match self {
            Self::Leap => 366,
            Self::NoLeap => 365,
        }
    }

    /// Returns the 0-based slot for `date`.
    pub fn slot(self, date: NaiveDate) -> usize {
        let doy = date.ordinal();
        let leap = is_leap_year(date.year());
        let one_based = match self {
            Self::Leap if !leap && doy >= FEB_29_DOY => doy + 1,
            Self::NoLeap if leap && doy >= FEB_29_DOY => doy - 1,
            _ => doy,
        };
        (one_based - 1) as usize
    }
}
