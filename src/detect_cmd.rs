//! Detect command: load a series file, merge its blocks and run detection.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mhw_calculator::Detector;
use mhw_detect::MhwDetector;

use crate::cli::DetectArgs;
use crate::config;
use crate::convert;
use crate::input;
use crate::report;

/// Run the detection pipeline on a series file.
pub fn run(args: DetectArgs) -> Result<()> {
    let _cmd = info_span!("detect").entered();
    // 1. Load project TOML and apply CLI overrides
    let mut config = config::load(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }
    let params = convert::build_params(&config.params, &args.set)?;

    // 2. Read and merge the series blocks
    let input_path =
        config.io.input.as_ref().ok_or_else(|| {
            anyhow::anyhow!("no input path: set [io].input in config or use --input")
        })?;
    info!(path = %input_path.display(), "reading series");
    let file = input::read_series(input_path)?;
    let calc = input::build_calculator(&file, params)
        .with_context(|| format!("invalid series file: {}", input_path.display()))?;
    info!(
        n_blocks = file.blocks.len(),
        n_days = calc.series().len(),
        "series loaded"
    );

    // 3. Detect
    let detector = MhwDetector::new();
    info!(detector = detector.name(), "running detection");
    let detection = calc.compute(&detector).context("detection failed")?;

    // 4. Report
    let report = report::build_report(&calc, &detection)?;
    report::write_report(&report, config.io.output.as_deref(), config.io.pretty)?;
    Ok(())
}
