//! AR(1) series with an annual cycle.

use std::f64::consts::PI;

use mhw_calendar::{ordinal_from_iso, ordinal_range};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::config::SynthConfig;
use crate::error::SynthError;

const YEAR_LENGTH: f64 = 365.25;

/// A generated `(days, temperature)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSeries {
    days: Vec<i64>,
    temperature: Vec<f64>,
}

impl SyntheticSeries {
    /// Returns the ordinal days.
    pub fn days(&self) -> &[i64] {
        &self.days
    }

    /// Returns the temperatures.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Consumes the series and returns `(days, temperature)`.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.days, self.temperature)
    }
}

/// Generates a daily series on every day from `start` to `end` inclusive.
///
/// `x[0] = 0` and `x[i] = a * x[i-1] + sd * N(0,1) + A * cos(2 pi t[i] / 365.25)`
/// with `t` the ordinal day. The result is shifted so its minimum equals
/// the configured floor.
///
/// # Errors
///
/// Returns [`SynthError::InvalidConfig`] if `config` is invalid,
/// [`SynthError::Calendar`] for a malformed date, or
/// [`SynthError::InvalidRange`] if `end` is not after `start`.
pub fn generate<R: Rng + ?Sized>(
    start: &str,
    end: &str,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<SyntheticSeries, SynthError> {
    config.validate()?;
    let lo = ordinal_from_iso(start)?;
    let hi = ordinal_from_iso(end)?;
    if hi <= lo {
        return Err(SynthError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let days = ordinal_range(lo, hi);
    let normal = Normal::new(0.0, config.noise_sd()).map_err(|e| SynthError::InvalidConfig {
        reason: e.to_string(),
    })?;

    let mut x = vec![0.0; days.len()];
    for i in 1..days.len() {
        let phase = days[i] as f64 * 2.0 * PI / YEAR_LENGTH;
        let seasonal = config.seasonal_amplitude() * phase.cos();
        x[i] = config.ar_coefficient() * x[i - 1] + normal.sample(rng) + seasonal;
    }

    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    let shift = config.floor() - min;
    let temperature: Vec<f64> = x.into_iter().map(|v| v + shift).collect();
    debug!(start, end, n = days.len(), "generated synthetic series");

    Ok(SyntheticSeries { days, temperature })
}
