//! # mhw-calculator
//!
//! Facade that owns one temperature series and one parameter set and hands
//! both to a marine heatwave [`Detector`].
//!
//! ```mermaid
//! graph LR
//!     A[DateInput + temps] -->|new / update_date| B[TimeSeries]
//!     C[key/value pairs] -->|update_params| D[ParameterSet]
//!     B --> E[Calculator::compute]
//!     D --> E
//!     E -->|Detector::detect| F[D::Output]
//! ```
//!
//! The calculator never inspects detector output. It only guarantees that
//! what it passes in is a valid series (equal lengths, strictly increasing
//! days) and a parameter set holding exactly the known keys.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mhw_calculator::Calculator;
//! use mhw_params::ParamValue;
//! use mhw_series::DateInput;
//!
//! let mut calc = Calculator::new(&DateInput::range("1982-01-01", "2014-12-31"), temps)?;
//! calc.update_params([("pctile", ParamValue::Int(95))])?;
//! calc.update_date(&DateInput::range("2015-01-03", "2016-12-31"), more_temps, 2)?;
//! let detection = calc.compute(&detector)?;
//! ```

mod calculator;
mod detector;
mod error;

pub use calculator::Calculator;
pub use detector::Detector;
pub use error::CalculatorError;
