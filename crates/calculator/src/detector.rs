//! The detection capability the calculator delegates to.

use mhw_params::ParameterSet;

/// Interface for marine heatwave detection algorithms.
///
/// The calculator hands over its days, temperatures and parameters and
/// returns whatever comes back, untouched.
pub trait Detector {
    /// Detection result (events, climatology, ...).
    type Output;
    /// Detection failure.
    type Error;

    /// Runs detection on a series.
    ///
    /// `days` and `temperature` have equal length and `days` is strictly
    /// increasing.
    fn detect(
        &self,
        days: &[i64],
        temperature: &[f64],
        params: &ParameterSet,
    ) -> Result<Self::Output, Self::Error>;

    /// Short name of the algorithm, used in logs.
    fn name(&self) -> &'static str;
}
