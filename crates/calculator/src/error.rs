//! Error types for the mhw-calculator crate.

use mhw_params::ParamError;
use mhw_series::SeriesError;

/// Error type for the calculator's own operations.
///
/// Detector failures are not wrapped here; [`Calculator::compute`] returns
/// the detector's error type unchanged.
///
/// [`Calculator::compute`]: crate::Calculator::compute
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    /// The series could not be created or extended.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// A parameter update was rejected.
    #[error(transparent)]
    Params(#[from] ParamError),
}
