//! # mhw-synth
//!
//! Synthetic daily temperature series: a first-order autoregressive process
//! driven by Gaussian noise and an annual cosine, shifted to a fixed floor.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mhw_synth::{SynthConfig, generate};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let series = generate("1982-01-01", "2014-12-31", &SynthConfig::default(), &mut rng)?;
//! let (days, temp) = series.into_parts();
//! ```

mod config;
mod error;
mod generate;

pub use config::SynthConfig;
pub use error::SynthError;
pub use generate::{SyntheticSeries, generate};
