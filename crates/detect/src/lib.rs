//! # mhw-detect
//!
//! Reference marine heatwave detector for the [`Detector`] interface of
//! `mhw-calculator`.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     A["days + temps"] --> B["negate (cold spells) / pad short NaN runs"]
//!     B --> C["day-of-year slots (366 or 365)"]
//!     C --> D["baseline in reference period"]
//!     D --> E["windowed percentile + mean per slot"]
//!     E --> F["circular smoothing"]
//!     F --> G["exceedance runs"]
//!     G --> H["min duration, join across short breaks"]
//!     H --> I["Detection { events, climatology }"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use mhw_calculator::Calculator;
//! use mhw_detect::MhwDetector;
//!
//! let detection = calculator.compute(&MhwDetector::new())?;
//! println!("{} events", detection.n_events());
//! ```
//!
//! [`Detector`]: mhw_calculator::Detector

mod climatology;
mod detector;
mod error;
mod events;

pub use climatology::Climatology;
pub use detector::{Detection, MhwDetector, detect};
pub use error::DetectError;
pub use events::{Category, Event};
