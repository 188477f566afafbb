//! Detection report written as JSON.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use mhw_calculator::Calculator;
use mhw_detect::{Climatology, Detection, Event};
use mhw_params::ParameterSet;
use mhw_series::Gap;

/// Everything one `detect` or `demo` run reports.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub time_start: String,
    pub time_end: String,
    pub n_days: usize,
    pub gaps: Vec<Gap>,
    pub params: &'a ParameterSet,
    pub n_events: usize,
    pub events: &'a [Event],
    pub climatology: &'a Climatology,
}

/// Collects the report for a calculator and its detection result.
pub fn build_report<'a>(calc: &'a Calculator, detection: &'a Detection) -> Result<Report<'a>> {
    let series = calc.series();
    let (time_start, time_end) = series
        .iso_bounds()
        .context("failed to format series bounds")?;
    Ok(Report {
        time_start,
        time_end,
        n_days: series.len(),
        gaps: series.gaps(),
        params: calc.params(),
        n_events: detection.n_events(),
        events: &detection.events,
        climatology: &detection.climatology,
    })
}

/// Serializes the report to JSON.
pub fn to_json(report: &Report<'_>, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("failed to serialize report")
}

/// Writes the report to `path`, or to stdout when `path` is `None`.
pub fn write_report(report: &Report<'_>, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = to_json(report, pretty)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), n_events = report.n_events, "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write report to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhw_detect::MhwDetector;
    use mhw_series::DateInput;

    fn calculator() -> Calculator {
        // two years of a gentle cycle with a one-week hole
        let days: Vec<i64> = (737425..737425 + 731)
            .filter(|d| !(737600..737607).contains(d))
            .collect();
        let temp = days
            .iter()
            .map(|&d| 15.0 + (d as f64 / 58.0).sin())
            .collect();
        Calculator::new(&DateInput::from(days), temp).unwrap()
    }

    #[test]
    fn report_fields() {
        let calc = calculator();
        let det = calc.compute(&MhwDetector::new()).unwrap();
        let report = build_report(&calc, &det).unwrap();
        assert_eq!(report.time_start, "2020-01-01");
        assert_eq!(report.n_days, 724);
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].missing, 7);

        let json: serde_json::Value =
            serde_json::from_str(&to_json(&report, false).unwrap()).unwrap();
        assert_eq!(json["params"]["pctile"], 90.0);
        assert_eq!(json["params"]["Ly"], false);
        assert_eq!(json["params"].as_object().unwrap().len(), 12);
        assert_eq!(json["n_events"], det.n_events());
        assert_eq!(json["climatology"]["seas"].as_array().unwrap().len(), 724);
    }

    #[test]
    fn written_to_nested_path() {
        let calc = calculator();
        let det = calc.compute(&MhwDetector::new()).unwrap();
        let report = build_report(&calc, &det).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        write_report(&report, Some(&path), true).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"time_end\""));
        assert!(written.contains('\n'));
    }
}
