//! Demo command: the incremental walk-through on synthetic data.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use mhw_calculator::Calculator;
use mhw_detect::{Detection, MhwDetector};
use mhw_params::{ClimatologyPeriod, ParamValue};
use mhw_series::DateInput;
use mhw_synth::{SynthConfig, SyntheticSeries, generate};

use crate::cli::DemoArgs;
use crate::config;
use crate::convert;
use crate::report;

/// Run the demo: build, recompute, update and extend a synthetic series.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo").entered();
    let mut config = config::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }
    let synth = convert::build_synth_config(&config.synth)?;
    let params = convert::build_params(&config.params, &[])?;

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let detector = MhwDetector::new();

    // 1. Baseline from explicit ordinal days
    let base = synthesize("1982-01-01", "2014-12-31", &synth, &mut rng)?;
    let (days, temp) = base.into_parts();
    let mut calc = Calculator::new(&DateInput::from(days), temp.clone())
        .context("failed to create calculator from ordinals")?;
    calc.set_params(params.clone());
    log_detection("ordinals", &calc.compute(&detector)?);

    // 2. The same series from its ISO range
    calc = Calculator::new(&DateInput::range("1982-01-01", "2014-12-31"), temp)
        .context("failed to create calculator from ISO range")?;
    calc.set_params(params);
    log_detection("iso range", &calc.compute(&detector)?);

    // 3. Narrow the reference period and raise the percentile
    calc.update_params([
        (
            "climatologyPeriod",
            ParamValue::from(ClimatologyPeriod::from([2012, 2013])),
        ),
        ("pctile", ParamValue::Int(95)),
    ])
    .context("failed to update parameters")?;
    log_detection("updated params", &calc.compute(&detector)?);

    // 4. Append two contiguous years
    let next = synthesize("2015-01-01", "2016-12-31", &synth, &mut rng)?;
    let (days, temp) = next.into_parts();
    let merged = calc
        .append_contiguous(&DateInput::from(days), temp)
        .context("failed to append 2015-2016")?;
    info!(appended = merged.appended, "contiguous block appended");

    // 5. Append after a four-day hole
    let later = synthesize("2017-01-05", "2018-12-31", &synth, &mut rng)?;
    let (_, temp) = later.into_parts();
    let merged = calc
        .update_date(&DateInput::range("2017-01-05", "2018-12-31"), temp, 4)
        .context("failed to append 2017-2018")?;
    info!(appended = merged.appended, gap = merged.gap, "block appended after gap");

    // 6. Final detection and report
    let detection = calc.compute(&detector)?;
    log_detection("extended", &detection);
    let report = report::build_report(&calc, &detection)?;
    report::write_report(&report, config.io.output.as_deref(), config.io.pretty)?;
    Ok(())
}

fn synthesize(
    start: &str,
    end: &str,
    synth: &SynthConfig,
    rng: &mut StdRng,
) -> Result<SyntheticSeries> {
    generate(start, end, synth, rng)
        .with_context(|| format!("failed to generate series {start}..{end}"))
}

fn log_detection(stage: &str, detection: &Detection) {
    info!(stage, n_events = detection.n_events(), "detection run");
}
