//! The fixed-schema parameter set.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ParamError;
use crate::key::ParamKey;
use crate::value::{AlternateClimatology, ClimatologyPeriod, ParamValue};

/// Detection parameters with documented defaults.
///
/// Serializes with the wire names of [`ParamKey`]. Optional parameters that
/// are switched off serialize as `false`.
///
/// # Example
///
/// ```
/// use mhw_params::{ParamValue, ParameterSet};
///
/// let mut params = ParameterSet::new();
/// params.update([("pctile", ParamValue::Int(95))]).unwrap();
/// assert_eq!(params.pctile(), 95.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    climatology_period: ClimatologyPeriod,
    pctile: f64,
    window_half_width: usize,
    smooth_percentile: bool,
    smooth_percentile_width: usize,
    min_duration: usize,
    join_across_gaps: bool,
    max_gap: usize,
    #[serde(serialize_with = "off_as_false")]
    max_pad_length: Option<usize>,
    cold_spells: bool,
    #[serde(serialize_with = "presence_as_bool")]
    alternate_climatology: Option<AlternateClimatology>,
    #[serde(rename = "Ly")]
    ly: bool,
}

fn off_as_false<S: Serializer>(v: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(n) => serializer.serialize_u64(*n as u64),
        None => serializer.serialize_bool(false),
    }
}

fn presence_as_bool<S: Serializer>(
    v: &Option<AlternateClimatology>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(v.is_some())
}

impl ParameterSet {
    /// Creates a parameter set with defaults.
    ///
    /// Defaults: `climatologyPeriod = [None, None]`, `pctile = 90`,
    /// `windowHalfWidth = 5`, `smoothPercentile = true`,
    /// `smoothPercentileWidth = 31`, `minDuration = 5`,
    /// `joinAcrossGaps = true`, `maxGap = 2`, `maxPadLength = disabled`,
    /// `coldSpells = false`, `alternateClimatology = false`, `Ly = false`.
    pub fn new() -> Self {
        Self {
            climatology_period: ClimatologyPeriod::full(),
            pctile: 90.0,
            window_half_width: 5,
            smooth_percentile: true,
            smooth_percentile_width: 31,
            min_duration: 5,
            join_across_gaps: true,
            max_gap: 2,
            max_pad_length: None,
            cold_spells: false,
            alternate_climatology: None,
            ly: false,
        }
    }

    /// Creates a parameter set from defaults plus named overrides.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn with_overrides<I, K>(overrides: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        let mut params = Self::new();
        params.update(overrides)?;
        Ok(params)
    }

    /// Applies a partial update of named values.
    ///
    /// Every name must belong to the schema; names are all resolved before
    /// any value is looked at. The batch is applied to a copy
    /// and committed only when every entry succeeded, so a failed update
    /// leaves `self` untouched. Values are not range-checked.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownParameter`] for a name outside the
    /// schema, or [`ParamError::TypeMismatch`] when every name is known but
    /// a value cannot populate its field.
    pub fn update<I, K>(&mut self, partial: I) -> Result<(), ParamError>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        let resolved = partial
            .into_iter()
            .map(|(name, value)| name.as_ref().parse::<ParamKey>().map(|key| (key, value)))
            .collect::<Result<Vec<_>, ParamError>>()?;

        let mut staged = self.clone();
        let mut touched = Vec::with_capacity(resolved.len());
        for (key, value) in resolved {
            staged.set(key, value)?;
            touched.push(key.as_str());
        }
        debug!(keys = ?touched, "parameters updated");
        *self = staged;
        Ok(())
    }

    /// Sets a single parameter from a loosely-typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TypeMismatch`] when `value` cannot populate the
    /// field of `key`.
    pub fn set(&mut self, key: ParamKey, value: ParamValue) -> Result<(), ParamError> {
        match key {
            ParamKey::ClimatologyPeriod => {
                self.climatology_period = match value {
                    ParamValue::Period(p) => p,
                    ParamValue::Disabled => ClimatologyPeriod::full(),
                    other => return Err(mismatch(key, "period", &other)),
                }
            }
            ParamKey::Pctile => {
                self.pctile = match value {
                    ParamValue::Float(v) => v,
                    ParamValue::Int(v) => v as f64,
                    other => return Err(mismatch(key, "number", &other)),
                }
            }
            ParamKey::WindowHalfWidth => self.window_half_width = days(key, value)?,
            ParamKey::SmoothPercentile => self.smooth_percentile = flag(key, value)?,
            ParamKey::SmoothPercentileWidth => self.smooth_percentile_width = days(key, value)?,
            ParamKey::MinDuration => self.min_duration = days(key, value)?,
            ParamKey::JoinAcrossGaps => self.join_across_gaps = flag(key, value)?,
            ParamKey::MaxGap => self.max_gap = days(key, value)?,
            ParamKey::MaxPadLength => {
                self.max_pad_length = match value {
                    ParamValue::Disabled | ParamValue::Bool(false) => None,
                    other => Some(days(key, other)?),
                }
            }
            ParamKey::ColdSpells => self.cold_spells = flag(key, value)?,
            ParamKey::AlternateClimatology => {
                self.alternate_climatology = match value {
                    ParamValue::Disabled | ParamValue::Bool(false) => None,
                    ParamValue::Series(s) => Some(s),
                    other => return Err(mismatch(key, "series or false", &other)),
                }
            }
            ParamKey::Ly => self.ly = flag(key, value)?,
        }
        Ok(())
    }

    /// Returns a snapshot of one parameter as a loosely-typed value.
    pub fn get(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::ClimatologyPeriod => ParamValue::Period(self.climatology_period),
            ParamKey::Pctile => ParamValue::Float(self.pctile),
            ParamKey::WindowHalfWidth => ParamValue::Int(self.window_half_width as i64),
            ParamKey::SmoothPercentile => ParamValue::Bool(self.smooth_percentile),
            ParamKey::SmoothPercentileWidth => {
                ParamValue::Int(self.smooth_percentile_width as i64)
            }
            ParamKey::MinDuration => ParamValue::Int(self.min_duration as i64),
            ParamKey::JoinAcrossGaps => ParamValue::Bool(self.join_across_gaps),
            ParamKey::MaxGap => ParamValue::Int(self.max_gap as i64),
            ParamKey::MaxPadLength => self
                .max_pad_length
                .map_or(ParamValue::Disabled, |n| ParamValue::Int(n as i64)),
            ParamKey::ColdSpells => ParamValue::Bool(self.cold_spells),
            ParamKey::AlternateClimatology => self
                .alternate_climatology
                .clone()
                .map_or(ParamValue::Disabled, ParamValue::Series),
            ParamKey::Ly => ParamValue::Bool(self.ly),
        }
    }

    // --- Builders ---

    /// Sets the climatology reference period.
    pub fn with_climatology_period(mut self, period: ClimatologyPeriod) -> Self {
        self.climatology_period = period;
        self
    }

    /// Sets the threshold percentile (0..=100).
    pub fn with_pctile(mut self, pctile: f64) -> Self {
        self.pctile = pctile;
        self
    }

    /// Sets the half width (days) of the window pooled around each day of year.
    pub fn with_window_half_width(mut self, days: usize) -> Self {
        self.window_half_width = days;
        self
    }

    /// Enables or disables smoothing of the threshold and seasonal curves.
    pub fn with_smooth_percentile(mut self, on: bool) -> Self {
        self.smooth_percentile = on;
        self
    }

    /// Sets the smoothing window width (days).
    pub fn with_smooth_percentile_width(mut self, days: usize) -> Self {
        self.smooth_percentile_width = days;
        self
    }

    /// Sets the minimum event duration (days).
    pub fn with_min_duration(mut self, days: usize) -> Self {
        self.min_duration = days;
        self
    }

    /// Enables or disables joining events across short breaks.
    pub fn with_join_across_gaps(mut self, on: bool) -> Self {
        self.join_across_gaps = on;
        self
    }

    /// Sets the longest break (days) two events may be joined across.
    pub fn with_max_gap(mut self, days: usize) -> Self {
        self.max_gap = days;
        self
    }

    /// Sets the longest run of missing values to interpolate, or `None`.
    pub fn with_max_pad_length(mut self, days: Option<usize>) -> Self {
        self.max_pad_length = days;
        self
    }

    /// Detects cold spells instead of heatwaves.
    pub fn with_cold_spells(mut self, on: bool) -> Self {
        self.cold_spells = on;
        self
    }

    /// Sets the alternate climatology series, or `None`.
    pub fn with_alternate_climatology(mut self, series: Option<AlternateClimatology>) -> Self {
        self.alternate_climatology = series;
        self
    }

    /// Sets the `Ly` year-length mode.
    pub fn with_ly(mut self, on: bool) -> Self {
        self.ly = on;
        self
    }

    // --- Accessors ---

    /// Returns the climatology reference period.
    pub fn climatology_period(&self) -> ClimatologyPeriod {
        self.climatology_period
    }

    /// Returns the threshold percentile.
    pub fn pctile(&self) -> f64 {
        self.pctile
    }

    /// Returns the pooling window half width.
    pub fn window_half_width(&self) -> usize {
        self.window_half_width
    }

    /// Returns whether smoothing is enabled.
    pub fn smooth_percentile(&self) -> bool {
        self.smooth_percentile
    }

    /// Returns the smoothing window width.
    pub fn smooth_percentile_width(&self) -> usize {
        self.smooth_percentile_width
    }

    /// Returns the minimum event duration.
    pub fn min_duration(&self) -> usize {
        self.min_duration
    }

    /// Returns whether events are joined across short breaks.
    pub fn join_across_gaps(&self) -> bool {
        self.join_across_gaps
    }

    /// Returns the longest joinable break.
    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Returns the padding limit, or `None` when disabled.
    pub fn max_pad_length(&self) -> Option<usize> {
        self.max_pad_length
    }

    /// Returns whether cold spells are detected.
    pub fn cold_spells(&self) -> bool {
        self.cold_spells
    }

    /// Returns the alternate climatology series, if any.
    pub fn alternate_climatology(&self) -> Option<&AlternateClimatology> {
        self.alternate_climatology.as_ref()
    }

    /// Returns the `Ly` year-length mode.
    pub fn ly(&self) -> bool {
        self.ly
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(key: ParamKey, expected: &'static str, got: &ParamValue) -> ParamError {
    ParamError::TypeMismatch {
        key: key.as_str(),
        expected,
        got: got.kind(),
    }
}

fn days(key: ParamKey, value: ParamValue) -> Result<usize, ParamError> {
    match value {
        ParamValue::Int(v) if v >= 0 => Ok(v as usize),
        other => Err(mismatch(key, "non-negative integer", &other)),
    }
}

fn flag(key: ParamKey, value: ParamValue) -> Result<bool, ParamError> {
    match value {
        ParamValue::Bool(v) => Ok(v),
        other => Err(mismatch(key, "bool", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ParameterSet::new();
        assert_eq!(p.climatology_period(), ClimatologyPeriod::full());
        assert_eq!(p.pctile(), 90.0);
        assert_eq!(p.window_half_width(), 5);
        assert!(p.smooth_percentile());
        assert_eq!(p.smooth_percentile_width(), 31);
        assert_eq!(p.min_duration(), 5);
        assert!(p.join_across_gaps());
        assert_eq!(p.max_gap(), 2);
        assert_eq!(p.max_pad_length(), None);
        assert!(!p.cold_spells());
        assert!(p.alternate_climatology().is_none());
        assert!(!p.ly());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(ParameterSet::default(), ParameterSet::new());
    }

    #[test]
    fn builder_chaining() {
        let p = ParameterSet::new()
            .with_climatology_period([1983, 2012].into())
            .with_pctile(95.0)
            .with_window_half_width(7)
            .with_smooth_percentile(false)
            .with_smooth_percentile_width(11)
            .with_min_duration(3)
            .with_join_across_gaps(false)
            .with_max_gap(1)
            .with_max_pad_length(Some(3))
            .with_cold_spells(true)
            .with_ly(true);
        assert_eq!(p.climatology_period().start(), Some(1983));
        assert_eq!(p.climatology_period().end(), Some(2012));
        assert_eq!(p.pctile(), 95.0);
        assert_eq!(p.window_half_width(), 7);
        assert!(!p.smooth_percentile());
        assert_eq!(p.smooth_percentile_width(), 11);
        assert_eq!(p.min_duration(), 3);
        assert!(!p.join_across_gaps());
        assert_eq!(p.max_gap(), 1);
        assert_eq!(p.max_pad_length(), Some(3));
        assert!(p.cold_spells());
        assert!(p.ly());
    }

    #[test]
    fn set_every_key_via_get_round_trip() {
        let source = ParameterSet::new()
            .with_pctile(97.5)
            .with_max_pad_length(Some(4))
            .with_alternate_climatology(Some(AlternateClimatology::new(
                vec![1, 2],
                vec![0.5, 0.6],
            )));
        let mut target = ParameterSet::new();
        for key in ParamKey::ALL {
            target.set(key, source.get(key)).unwrap();
        }
        assert_eq!(target, source);
    }

    #[test]
    fn pctile_accepts_integers() {
        let mut p = ParameterSet::new();
        p.set(ParamKey::Pctile, ParamValue::Int(95)).unwrap();
        assert_eq!(p.pctile(), 95.0);
    }

    #[test]
    fn negative_day_count_rejected() {
        let mut p = ParameterSet::new();
        let err = p.set(ParamKey::MinDuration, ParamValue::Int(-1)).unwrap_err();
        assert_eq!(
            err,
            ParamError::TypeMismatch {
                key: "minDuration",
                expected: "non-negative integer",
                got: "negative integer",
            }
        );
    }

    #[test]
    fn max_pad_length_switches_off() {
        let mut p = ParameterSet::new().with_max_pad_length(Some(2));
        p.set(ParamKey::MaxPadLength, ParamValue::Bool(false)).unwrap();
        assert_eq!(p.max_pad_length(), None);
        p.set(ParamKey::MaxPadLength, ParamValue::Int(6)).unwrap();
        assert_eq!(p.max_pad_length(), Some(6));
    }

    #[test]
    fn alternate_climatology_true_is_rejected() {
        let mut p = ParameterSet::new();
        assert!(matches!(
            p.set(ParamKey::AlternateClimatology, ParamValue::Bool(true)),
            Err(ParamError::TypeMismatch {
                key: "alternateClimatology",
                ..
            })
        ));
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(ParameterSet::new()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        for key in ParamKey::ALL {
            assert!(obj.contains_key(key.as_str()), "missing {key}");
        }
        assert_eq!(obj["maxPadLength"], serde_json::json!(false));
        assert_eq!(obj["alternateClimatology"], serde_json::json!(false));
        assert_eq!(obj["climatologyPeriod"], serde_json::json!([null, null]));
        assert_eq!(obj["pctile"], serde_json::json!(90.0));
    }
}
