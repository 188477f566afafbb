//! Fixed-schema parameter set for marine heatwave detection.
//!
//! A [`ParameterSet`] always holds exactly the twelve parameters listed by
//! [`ParamKey::ALL`]. Typed code configures it through the `with_*`
//! builders; loosely-typed callers (config files, command lines) go through
//! [`ParameterSet::update`], which resolves each key name against the schema
//! and rejects anything outside it.
//!
//! # Quick start
//!
//! ```ignore
//! use mhw_params::{ParamValue, ParameterSet};
//!
//! let mut params = ParameterSet::new().with_pctile(95.0);
//! params.update([("minDuration", ParamValue::Int(3))])?;
//! assert!(params.update([("pctlie", ParamValue::Int(95))]).is_err());
//! ```

mod error;
mod key;
mod set;
mod value;

pub use error::ParamError;
pub use key::ParamKey;
pub use set::ParameterSet;
pub use value::{AlternateClimatology, ClimatologyPeriod, ParamValue};
