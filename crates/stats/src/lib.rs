//! Statistical helper functions for the mhw workspace.
//!
//! Every helper here is NaN-aware in the same way: non-finite values are
//! treated as missing, never as data.

/// Mean of the finite values in `data`, or `None` when there are none.
pub fn finite_mean(data: &[f64]) -> Option<f64> {
    let (sum, n) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// R's default quantile algorithm (type=7), equivalent to numpy's `linear`.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile (0..=100) of the finite values in `data`.
///
/// Sorts a copy and applies [`quantile_type7`]. Returns `None` when `data`
/// has no finite values.
pub fn percentile(data: &[f64], pct: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(quantile_type7(&sorted, pct / 100.0))
}

/// Centred moving average over a circular buffer.
///
/// The window spans `width / 2` slots on each side, so even widths are
/// widened by one. Missing values inside a window are skipped; a window with
/// no finite value yields NaN.
pub fn circular_moving_average(values: &[f64], width: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 || width <= 1 {
        return values.to_vec();
    }
    let half = (width / 2) as isize;
    let n_i = n as isize;
    (0..n_i)
        .map(|i| {
            let (sum, count) = (-half..=half)
                .map(|off| values[(i + off).rem_euclid(n_i) as usize])
                .filter(|v| v.is_finite())
                .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
        .collect()
}

/// Fills missing slots of a circular buffer by linear interpolation between
/// the nearest finite neighbours on either side (wrapping around the ends).
///
/// A buffer with no finite value is returned unchanged.
pub fn fill_circular_gaps(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut out = values.to_vec();
    if values.iter().all(|v| !v.is_finite()) {
        return out;
    }
    for i in 0..n {
        if values[i].is_finite() {
            continue;
        }
        let back = (1..n)
            .find(|&d| values[(i + n - d) % n].is_finite())
            .unwrap_or(n);
        let fwd = (1..n).find(|&d| values[(i + d) % n].is_finite()).unwrap_or(n);
        let prev = values[(i + n - back) % n];
        let next = values[(i + fwd) % n];
        out[i] = prev + (next - prev) * back as f64 / (back + fwd) as f64;
    }
    out
}

/// Linearly interpolates interior runs of missing values no longer than
/// `max_len`.
///
/// Runs touching either end of the slice, and runs longer than `max_len`,
/// stay missing.
pub fn interpolate_short_gaps(values: &[f64], max_len: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    let n = values.len();
    let mut i = 0;
    while i < n {
        if values[i].is_finite() {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && !values[i].is_finite() {
            i += 1;
        }
        let run = i - start;
        if start == 0 || i == n || run > max_len {
            continue;
        }
        let left = values[start - 1];
        let right = values[i];
        let span = (run + 1) as f64;
        for (k, slot) in out[start..i].iter_mut().enumerate() {
            *slot = left + (right - left) * (k + 1) as f64 / span;
        }
    }
    out
}
