//! The detection pipeline and its [`Detector`] implementation.

use chrono::{Datelike, NaiveDate};
use mhw_calculator::Detector;
use mhw_calendar::{DayAxis, date_from_ordinal};
use mhw_params::ParameterSet;
use mhw_stats::interpolate_short_gaps;
use serde::Serialize;
use tracing::{debug, info};

use crate::climatology::{Climatology, CycleOptions, SeasonalCycle};
use crate::error::DetectError;
use crate::events::{Event, describe, exceedance_runs, filter_and_join};

/// Everything one detection run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// Detected events, in time order.
    pub events: Vec<Event>,
    /// Threshold and seasonal mean on every input day.
    pub climatology: Climatology,
}

impl Detection {
    /// Number of detected events.
    pub fn n_events(&self) -> usize {
        self.events.len()
    }
}

/// Percentile-threshold marine heatwave detector.
///
/// A day is anomalous when its temperature exceeds the seasonally varying
/// percentile threshold of a baseline period; runs of at least
/// `minDuration` anomalous days are events.
#[derive(Debug, Clone, Copy, Default)]
pub struct MhwDetector;

impl MhwDetector {
    /// Creates the detector.
    pub fn new() -> Self {
        Self
    }
}

impl Detector for MhwDetector {
    type Output = Detection;
    type Error = DetectError;

    fn detect(
        &self,
        days: &[i64],
        temperature: &[f64],
        params: &ParameterSet,
    ) -> Result<Detection, DetectError> {
        detect(days, temperature, params)
    }

    fn name(&self) -> &'static str {
        "percentile-threshold"
    }
}

/// Runs detection on a series.
///
/// # Errors
///
/// Returns [`DetectError`] when the inputs or parameters are unusable, or
/// when the reference period holds no finite baseline value.
#[tracing::instrument(
    skip_all,
    fields(n_days = days.len(), cold_spells = params.cold_spells())
)]
pub fn detect(
    days: &[i64],
    temperature: &[f64],
    params: &ParameterSet,
) -> Result<Detection, DetectError> {
    validate(days, temperature, params)?;

    let sign = if params.cold_spells() { -1.0 } else { 1.0 };
    let pad = |values: &[f64]| -> Vec<f64> {
        let flipped: Vec<f64> = values.iter().map(|v| sign * v).collect();
        match params.max_pad_length() {
            Some(n) => interpolate_short_gaps(&flipped, n),
            None => flipped,
        }
    };
    let temp = pad(temperature);

    let axis = if params.ly() {
        DayAxis::NoLeap
    } else {
        DayAxis::Leap
    };
    let dates = to_dates(days)?;
    let slots: Vec<usize> = dates.iter().map(|&d| axis.slot(d)).collect();

    let cycle = match params.alternate_climatology() {
        Some(alt) => {
            if alt.days().len() != alt.temperature().len() {
                return Err(DetectError::LengthMismatch {
                    days: alt.days().len(),
                    temperature: alt.temperature().len(),
                });
            }
            let alt_dates = to_dates(alt.days())?;
            baseline_cycle(&alt_dates, &pad(alt.temperature()), axis, params)?
        }
        None => baseline_cycle(&dates, &temp, axis, params)?,
    };
    let clim = cycle.on_days(&slots);

    let exceeds: Vec<bool> = temp
        .iter()
        .zip(&clim.thresh)
        .map(|(&t, &th)| t > th)
        .collect();
    let runs = exceedance_runs(days, &exceeds);
    let join = params.join_across_gaps().then_some(params.max_gap());
    let spans = filter_and_join(days, runs, params.min_duration(), join);
    debug!(candidates = spans.len(), "exceedance runs kept");

    let events: Vec<Event> = spans
        .into_iter()
        .map(|span| describe(span, days, &temp, &clim.thresh, &clim.seas, sign))
        .collect();
    info!(n_events = events.len(), "detection complete");

    let climatology = Climatology {
        thresh: clim.thresh.iter().map(|v| sign * v).collect(),
        seas: clim.seas.iter().map(|v| sign * v).collect(),
    };
    Ok(Detection {
        events,
        climatology,
    })
}

fn validate(days: &[i64], temperature: &[f64], params: &ParameterSet) -> Result<(), DetectError> {
    if days.is_empty() {
        return Err(DetectError::EmptyData);
    }
    if days.len() != temperature.len() {
        return Err(DetectError::LengthMismatch {
            days: days.len(),
            temperature: temperature.len(),
        });
    }
    let pctile = params.pctile();
    if !(0.0..=100.0).contains(&pctile) {
        return Err(DetectError::InvalidPercentile { value: pctile });
    }
    if params.min_duration() == 0 {
        return Err(DetectError::InvalidMinDuration);
    }
    if params.smooth_percentile() && params.smooth_percentile_width() == 0 {
        return Err(DetectError::InvalidSmoothingWidth);
    }
    Ok(())
}

fn to_dates(days: &[i64]) -> Result<Vec<NaiveDate>, DetectError> {
    days.iter()
        .map(|&d| date_from_ordinal(d).map_err(DetectError::from))
        .collect()
}

/// Estimates the seasonal cycle from the baseline days inside the
/// reference period.
fn baseline_cycle(
    dates: &[NaiveDate],
    values: &[f64],
    axis: DayAxis,
    params: &ParameterSet,
) -> Result<SeasonalCycle, DetectError> {
    let period = params.climatology_period();
    // An empty alternate series ends up as EmptyClimatology.
    let first_year = dates.first().map(|&d| d.year()).unwrap_or(0);
    let last_year = dates.last().map(|&d| d.year()).unwrap_or(0);
    let start = period.start().unwrap_or(first_year);
    let end = period.end().unwrap_or(last_year);

    let (slots, kept): (Vec<usize>, Vec<f64>) = dates
        .iter()
        .zip(values)
        .filter(|(d, _)| (start..=end).contains(&d.year()))
        .map(|(&d, &v)| (axis.slot(d), v))
        .unzip();
    debug!(start, end, samples = kept.len(), "baseline selected");

    let opts = CycleOptions {
        n_slots: axis.slots(),
        window_half_width: params.window_half_width(),
        pctile: params.pctile(),
        smooth_width: params
            .smooth_percentile()
            .then_some(params.smooth_percentile_width()),
    };
    SeasonalCycle::estimate(&slots, &kept, opts)
        .ok_or(DetectError::EmptyClimatology { start, end })
}
