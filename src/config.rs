use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "mhw.toml";

/// Top-level mhw configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MhwConfig {
    /// Global RNG seed for the demo generator.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Detection parameter overrides, keyed by wire name.
    ///
    /// Left open here; unknown names are rejected by the parameter set.
    #[serde(default)]
    pub params: BTreeMap<String, toml::Value>,

    /// Synthetic series generator settings.
    #[serde(default)]
    pub synth: SynthToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            pretty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthToml {
    #[serde(default = "default_ar_coefficient")]
    pub ar_coefficient: f64,
    #[serde(default = "default_noise_sd")]
    pub noise_sd: f64,
    #[serde(default = "default_seasonal_amplitude")]
    pub seasonal_amplitude: f64,
    #[serde(default = "default_floor")]
    pub floor: f64,
}

impl Default for SynthToml {
    fn default() -> Self {
        Self {
            ar_coefficient: default_ar_coefficient(),
            noise_sd: default_noise_sd(),
            seasonal_amplitude: default_seasonal_amplitude(),
            floor: default_floor(),
        }
    }
}

fn default_ar_coefficient() -> f64 {
    0.85
}
fn default_noise_sd() -> f64 {
    0.75
}
fn default_seasonal_amplitude() -> f64 {
    0.5
}
fn default_floor() -> f64 {
    5.0
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `mhw.toml` in the working
/// directory is used when present and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<MhwConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => return Ok(MhwConfig::default()),
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
