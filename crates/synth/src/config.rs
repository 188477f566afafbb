//! Generator configuration.

use crate::error::SynthError;

/// Settings of the AR(1) + annual-cycle generator.
///
/// Defaults: `ar_coefficient = 0.85`, `noise_sd = 0.75`,
/// `seasonal_amplitude = 0.5`, `floor = 5.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    ar_coefficient: f64,
    noise_sd: f64,
    seasonal_amplitude: f64,
    floor: f64,
}

impl SynthConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            ar_coefficient: 0.85,
            noise_sd: 0.75,
            seasonal_amplitude: 0.5,
            floor: 5.0,
        }
    }

    /// Sets the lag-1 autoregressive coefficient (`|a| < 1`).
    pub fn with_ar_coefficient(mut self, a: f64) -> Self {
        self.ar_coefficient = a;
        self
    }

    /// Sets the innovation standard deviation (> 0).
    pub fn with_noise_sd(mut self, sd: f64) -> Self {
        self.noise_sd = sd;
        self
    }

    /// Sets the amplitude of the annual cosine forcing.
    pub fn with_seasonal_amplitude(mut self, amplitude: f64) -> Self {
        self.seasonal_amplitude = amplitude;
        self
    }

    /// Sets the minimum of the generated series.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Returns the autoregressive coefficient.
    pub fn ar_coefficient(&self) -> f64 {
        self.ar_coefficient
    }

    /// Returns the innovation standard deviation.
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    /// Returns the seasonal amplitude.
    pub fn seasonal_amplitude(&self) -> f64 {
        self.seasonal_amplitude
    }

    /// Returns the series minimum.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Validates every field.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> Result<(), SynthError> {
        if !self.ar_coefficient.is_finite() || self.ar_coefficient.abs() >= 1.0 {
            return Err(SynthError::InvalidConfig {
                reason: format!(
                    "ar_coefficient must be finite with |a| < 1, got {}",
                    self.ar_coefficient
                ),
            });
        }
        if !self.noise_sd.is_finite() || self.noise_sd <= 0.0 {
            return Err(SynthError::InvalidConfig {
                reason: format!("noise_sd must be finite and > 0, got {}", self.noise_sd),
            });
        }
        if !self.seasonal_amplitude.is_finite() {
            return Err(SynthError::InvalidConfig {
                reason: format!(
                    "seasonal_amplitude must be finite, got {}",
                    self.seasonal_amplitude
                ),
            });
        }
        if !self.floor.is_finite() {
            return Err(SynthError::InvalidConfig {
                reason: format!("floor must be finite, got {}", self.floor),
            });
        }
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}
