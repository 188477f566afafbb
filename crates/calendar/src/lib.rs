//! # mhw-calendar
//!
//! Ordinal-day arithmetic on the proleptic Gregorian calendar.
//!
//! An ordinal day counts days from 0001-01-01 (ordinal 1), which is the time
//! axis every other crate in the workspace works on.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YYYY-MM-DD)"] -->|"ordinal_from_iso()"| B["i64 ordinal"]
//!     B -->|"date_from_ordinal()"| C["NaiveDate"]
//!     C -->|"ordinal_from_date()"| B
//!     B -->|"ordinal_range()"| D["Vec of ordinals"]
//!     C -->|"DayAxis::slot()"| E["day-of-year slot"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use mhw_calendar::{DayAxis, ordinal_from_iso, ordinal_range, date_from_ordinal};
//!
//! let start = ordinal_from_iso("2020-01-01")?; // 737425
//! let end = ordinal_from_iso("2020-01-05")?;
//! let days = ordinal_range(start, end); // five consecutive ordinals
//!
//! let date = date_from_ordinal(days[0])?;
//! let slot = DayAxis::Leap.slot(date); // 0
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ordinal` | ISO string / `NaiveDate` / ordinal conversions |
//! | `doy` | Day-of-year axes used for seasonal climatologies |
//! | `sequence` | Contiguous ordinal ranges |
//! | `error` | Error types |

mod doy;
mod error;
mod ordinal;
mod sequence;

pub use chrono::NaiveDate;
pub use doy::{DayAxis, is_leap_year};
pub use error::CalendarError;
pub use ordinal::{date_from_ordinal, iso_from_ordinal, ordinal_from_date, ordinal_from_iso};
pub use sequence::ordinal_range;
