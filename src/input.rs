//! Series input file: a list of blocks loaded and merged in order.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use mhw_calculator::Calculator;
use mhw_params::ParameterSet;
use mhw_series::DateInput;

/// Top-level series file.
///
/// ```json
/// { "blocks": [
///     { "t": ["1982-01-01", "2014-12-31"], "temp": [ ... ] },
///     { "t": [735599, 735600], "temp": [1.0, null], "max_allowed_gap": 0 } ] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesFile {
    pub blocks: Vec<Block>,
}

/// One block of days and temperatures.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    /// ISO `[start, end]` pair or explicit ordinal days.
    pub t: DateInput,
    /// Temperatures; `null` marks a missing value.
    pub temp: Vec<Option<f64>>,
    /// Largest hole tolerated before this block (ignored for the first).
    #[serde(default)]
    pub max_allowed_gap: usize,
}

impl Block {
    fn temperature(&self) -> Vec<f64> {
        self.temp.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    }
}

/// Reads and parses a series file.
pub fn read_series(path: &Path) -> Result<SeriesFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse series file: {}", path.display()))
}

/// Creates a calculator from the first block and merges the rest.
pub fn build_calculator(file: &SeriesFile, params: ParameterSet) -> Result<Calculator> {
    let Some((first, rest)) = file.blocks.split_first() else {
        bail!("series file has no blocks");
    };

    let mut calc = Calculator::new(&first.t, first.temperature())
        .context("failed to load block 0")?;
    calc.set_params(params);

    for (i, block) in rest.iter().enumerate() {
        let report = calc
            .update_date(&block.t, block.temperature(), block.max_allowed_gap)
            .with_context(|| format!("failed to merge block {}", i + 1))?;
        info!(block = i + 1, appended = report.appended, gap = report.gap, "block merged");
    }
    Ok(calc)
}
