//! # mhw-series
//!
//! The canonical daily temperature series and the rules for growing it.
//!
//! Date inputs arrive either as an ISO start/end pair or as explicit ordinal
//! days. [`normalize_days`] turns both into one strictly increasing ordinal
//! sequence, and [`TimeSeries`] keeps that sequence paired with its
//! temperatures. A series only grows at its end: [`TimeSeries::merge`]
//! appends a block after checking the gap to the last stored day.
//!
//! ## Merge rules
//!
//! With `gap = first new day - last stored day - 1`:
//!
//! | condition | result |
//! |-----------|--------|
//! | `gap < 0` | [`SeriesError::Overlap`] |
//! | `max_allowed_gap == 0 && gap != 0` | [`SeriesError::NonContiguous`] |
//! | `gap > max_allowed_gap` | [`SeriesError::GapTooLarge`] |
//! | otherwise | appended, holes left as holes |
//!
//! ## Quick Start
//!
//! ```ignore
//! use mhw_series::{DateInput, TimeSeries};
//!
//! let mut s = TimeSeries::new(&DateInput::range("2020-01-01", "2020-01-05"), vec![20.0; 5])?;
//! s.merge(&DateInput::from(vec![737432, 737433]), vec![21.0, 21.5], 2)?;
//! assert_eq!(s.gaps()[0].missing, 2);
//! ```

mod error;
mod normalize;
mod series;

pub use error::SeriesError;
pub use normalize::{DateInput, normalize_days};
pub use series::{Gap, MergeReport, TimeSeries};
