//! The calculator state object.

use mhw_params::{ParamValue, ParameterSet};
use mhw_series::{DateInput, MergeReport, TimeSeries};
use tracing::{debug, info};

use crate::detector::Detector;
use crate::error::CalculatorError;

/// One temperature series plus the parameters to run detection with.
///
/// Every mutation is all-or-nothing: a rejected parameter update or series
/// extension leaves the calculator exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    series: TimeSeries,
    params: ParameterSet,
}

impl Calculator {
    /// Creates a calculator with default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Series`] if the dates cannot be normalised
    /// or do not match `temperature` in length.
    pub fn new(input: &DateInput, temperature: Vec<f64>) -> Result<Self, CalculatorError> {
        Ok(Self::from_parts(
            TimeSeries::new(input, temperature)?,
            ParameterSet::new(),
        ))
    }

    /// Creates a calculator with default parameters plus `overrides`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Series`] for bad dates, or
    /// [`CalculatorError::Params`] for an unknown or ill-typed override.
    pub fn with_params<I, K>(
        input: &DateInput,
        temperature: Vec<f64>,
        overrides: I,
    ) -> Result<Self, CalculatorError>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        let series = TimeSeries::new(input, temperature)?;
        let params = ParameterSet::with_overrides(overrides)?;
        Ok(Self::from_parts(series, params))
    }

    /// Assembles a calculator from an existing series and parameter set.
    pub fn from_parts(series: TimeSeries, params: ParameterSet) -> Self {
        Self { series, params }
    }

    /// Applies a partial parameter update.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Params`]; nothing is written in that case.
    pub fn update_params<I, K>(&mut self, partial: I) -> Result<(), CalculatorError>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        self.params.update(partial).map_err(CalculatorError::from)
    }

    /// Extends the series with a new block, tolerating a hole of at most
    /// `max_allowed_gap` days before it (`0` demands a contiguous block).
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Series`]; the series is unchanged in that
    /// case.
    pub fn update_date(
        &mut self,
        input: &DateInput,
        temperature: Vec<f64>,
        max_allowed_gap: usize,
    ) -> Result<MergeReport, CalculatorError> {
        let report = self.series.merge(input, temperature, max_allowed_gap)?;
        debug!(
            appended = report.appended,
            gap = report.gap,
            last_day = self.series.last_day(),
            "series extended"
        );
        Ok(report)
    }

    /// [`update_date`](Self::update_date) with no hole allowed.
    ///
    /// # Errors
    ///
    /// Same as [`update_date`](Self::update_date).
    pub fn append_contiguous(
        &mut self,
        input: &DateInput,
        temperature: Vec<f64>,
    ) -> Result<MergeReport, CalculatorError> {
        self.update_date(input, temperature, 0)
    }

    /// Runs `detector` on the current series and parameters.
    ///
    /// The result and any error are passed through unchanged.
    ///
    /// # Errors
    ///
    /// Whatever `detector` returns.
    #[tracing::instrument(
        skip_all,
        fields(detector = detector.name(), n_days = self.series.len())
    )]
    pub fn compute<D: Detector>(&self, detector: &D) -> Result<D::Output, D::Error> {
        match self.series.iso_bounds() {
            Ok((start, end)) => info!(%start, %end, "computing"),
            Err(_) => info!(
                start = self.series.first_day(),
                end = self.series.last_day(),
                "computing"
            ),
        }
        debug!(params = ?self.params, "detection parameters");
        detector.detect(self.series.days(), self.series.temperature(), &self.params)
    }

    /// Returns the series.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Returns the parameters.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Replaces the whole parameter set.
    pub fn set_params(&mut self, params: ParameterSet) {
        self.params = params;
    }

    /// Consumes the calculator and returns its parts.
    pub fn into_parts(self) -> (TimeSeries, ParameterSet) {
        (self.series, self.params)
    }
}
