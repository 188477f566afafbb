//! Seasonal climatology: per day-of-year threshold and mean.

use mhw_stats::{circular_moving_average, fill_circular_gaps, finite_mean, percentile};
use serde::Serialize;

/// Threshold and seasonal mean evaluated on every day of the input series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Climatology {
    /// Percentile threshold per day.
    pub thresh: Vec<f64>,
    /// Seasonal mean per day.
    pub seas: Vec<f64>,
}

/// Per-slot curves on a day-of-year axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SeasonalCycle {
    pub(crate) thresh: Vec<f64>,
    pub(crate) seas: Vec<f64>,
}

/// Options controlling how the seasonal cycle is estimated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CycleOptions {
    pub(crate) n_slots: usize,
    pub(crate) window_half_width: usize,
    pub(crate) pctile: f64,
    /// Moving-average width, `None` for no smoothing.
    pub(crate) smooth_width: Option<usize>,
}

impl SeasonalCycle {
    /// Estimates the cycle from baseline samples already placed on slots.
    ///
    /// Every slot pools the finite samples whose slot lies within
    /// `window_half_width` of it (wrapping around the year end). The window
    /// never covers more than the whole axis, so no slot is pooled twice.
    /// Returns `None` when no sample is finite.
    pub(crate) fn estimate(slots: &[usize], values: &[f64], opts: CycleOptions) -> Option<Self> {
        let n = opts.n_slots;
        let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
        for (&slot, &v) in slots.iter().zip(values) {
            if v.is_finite() {
                buckets[slot].push(v);
            }
        }
        if buckets.iter().all(Vec::is_empty) {
            return None;
        }

        let half = opts.window_half_width.min(n.saturating_sub(1) / 2);
        let mut thresh = vec![f64::NAN; n];
        let mut seas = vec![f64::NAN; n];
        let mut pooled = Vec::new();
        for s in 0..n {
            pooled.clear();
            for off in 0..=2 * half {
                let k = (s + n + off - half) % n;
                pooled.extend_from_slice(&buckets[k]);
            }
            if let Some(p) = percentile(&pooled, opts.pctile) {
                thresh[s] = p;
            }
            if let Some(m) = finite_mean(&pooled) {
                seas[s] = m;
            }
        }

        let mut thresh = fill_circular_gaps(&thresh);
        let mut seas = fill_circular_gaps(&seas);
        if let Some(width) = opts.smooth_width {
            thresh = circular_moving_average(&thresh, width);
            seas = circular_moving_average(&seas, width);
        }
        Some(Self { thresh, seas })
    }

    /// Looks the curves up for each slot of a series.
    pub(crate) fn on_days(&self, slots: &[usize]) -> Climatology {
        Climatology {
            thresh: slots.iter().map(|&s| self.thresh[s]).collect(),
            seas: slots.iter().map(|&s| self.seas[s]).collect(),
        }
    }
}
