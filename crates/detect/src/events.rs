//! Event extraction from exceedance runs.

use serde::Serialize;

/// Severity class, from how many threshold-to-mean differences the peak
/// anomaly spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    Moderate,
    Strong,
    Severe,
    Extreme,
}

impl Category {
    /// Classifies `intensity / (thresh - seas)` at the event peak.
    ///
    /// The floor of the ratio is clamped to `1..=4`; a NaN ratio is
    /// `Moderate`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 4.0 {
            Self::Extreme
        } else if ratio >= 3.0 {
            Self::Severe
        } else if ratio >= 2.0 {
            Self::Strong
        } else {
            Self::Moderate
        }
    }
}

/// One detected event.
///
/// Intensities are anomalies relative to the seasonal mean. For cold spells
/// they are negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Series index of the first day.
    pub index_start: usize,
    /// Series index of the last day.
    pub index_end: usize,
    /// Series index of the peak day.
    pub index_peak: usize,
    /// Ordinal day the event starts.
    pub day_start: i64,
    /// Ordinal day the event ends.
    pub day_end: i64,
    /// Ordinal day of the peak.
    pub day_peak: i64,
    /// Calendar days from start to end, inclusive.
    pub duration: i64,
    pub intensity_max: f64,
    pub intensity_mean: f64,
    pub intensity_cumulative: f64,
    /// Peak value relative to the threshold.
    pub intensity_max_relative_thresh: f64,
    pub category: Category,
}

/// Inclusive index span of a candidate event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Runs of consecutive exceeding days.
///
/// A run also ends where the day axis itself has a hole.
pub(crate) fn exceedance_runs(days: &[i64], exceeds: &[bool]) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut current: Option<Span> = None;
    for (i, &hit) in exceeds.iter().enumerate() {
        if !hit {
            runs.extend(current.take());
            continue;
        }
        let continues = i > 0 && days[i] - days[i - 1] == 1;
        match current.as_mut() {
            Some(span) if continues => span.end = i,
            _ => {
                runs.extend(current.take());
                current = Some(Span { start: i, end: i });
            }
        }
    }
    runs.extend(current);
    runs
}

/// Drops short runs, then joins runs separated by at most `max_gap` days.
pub(crate) fn filter_and_join(
    days: &[i64],
    runs: Vec<Span>,
    min_duration: usize,
    join_max_gap: Option<usize>,
) -> Vec<Span> {
    let min_duration = min_duration as i64;
    let long: Vec<Span> = runs
        .into_iter()
        .filter(|s| days[s.end] - days[s.start] + 1 >= min_duration)
        .collect();

    let Some(max_gap) = join_max_gap else {
        return long;
    };
    let mut joined: Vec<Span> = Vec::with_capacity(long.len());
    for span in long {
        match joined.last_mut() {
            Some(prev) if days[span.start] - days[prev.end] - 1 <= max_gap as i64 => {
                prev.end = span.end;
            }
            _ => joined.push(span),
        }
    }
    joined
}

/// Computes event metrics over a span.
///
/// `sign` is `-1.0` when the series was negated for cold-spell detection;
/// intensities are flipped back with it.
pub(crate) fn describe(
    span: Span,
    days: &[i64],
    temp: &[f64],
    thresh: &[f64],
    seas: &[f64],
    sign: f64,
) -> Event {
    let range = span.start..=span.end;
    let mut peak = span.start;
    let mut peak_anom = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut n = 0usize;
    for i in range {
        let anom = temp[i] - seas[i];
        if !anom.is_finite() {
            continue;
        }
        sum += anom;
        n += 1;
        if anom > peak_anom {
            peak_anom = anom;
            peak = i;
        }
    }
    let mean = if n == 0 { f64::NAN } else { sum / n as f64 };
    let diff = thresh[peak] - seas[peak];

    Event {
        index_start: span.start,
        index_end: span.end,
        index_peak: peak,
        day_start: days[span.start],
        day_end: days[span.end],
        day_peak: days[peak],
        duration: days[span.end] - days[span.start] + 1,
        intensity_max: sign * peak_anom,
        intensity_mean: sign * mean,
        intensity_cumulative: sign * sum,
        intensity_max_relative_thresh: sign * (temp[peak] - thresh[peak]),
        category: Category::from_ratio(peak_anom / diff),
    }
}
