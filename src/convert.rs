//! Pure conversion functions: TOML and command-line values -> crate API types.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};

use mhw_params::{AlternateClimatology, ClimatologyPeriod, ParamValue, ParameterSet};
use mhw_synth::SynthConfig;

use crate::config::SynthToml;

/// Converts one `[params]` entry into a [`ParamValue`].
///
/// Accepted shapes: booleans, integers, floats, a two-element year array
/// for `climatologyPeriod` (use `"none"` for an open side), a table with
/// `days` and `temperature` arrays for `alternateClimatology`, and strings,
/// which are parsed like `--set` values.
pub fn param_value(key: &str, value: &toml::Value) -> Result<ParamValue> {
    match value {
        toml::Value::Boolean(b) => Ok(ParamValue::Bool(*b)),
        toml::Value::Integer(i) => Ok(ParamValue::Int(*i)),
        toml::Value::Float(f) => Ok(ParamValue::Float(*f)),
        toml::Value::String(s) => s
            .parse()
            .with_context(|| format!("parameter {key}: bad value {s:?}")),
        toml::Value::Array(items) => parse_period(key, items),
        toml::Value::Table(table) => parse_series(key, table),
        toml::Value::Datetime(_) => bail!("parameter {key}: dates are not accepted here"),
    }
}

fn parse_period(key: &str, items: &[toml::Value]) -> Result<ParamValue> {
    let [start, end] = items else {
        bail!(
            "parameter {key}: expected [start, end], got {} elements",
            items.len()
        );
    };
    let year = |v: &toml::Value| -> Result<Option<i32>> {
        match v {
            toml::Value::Integer(y) => i32::try_from(*y)
                .map(Some)
                .with_context(|| format!("parameter {key}: year {y} out of range")),
            toml::Value::String(s) if s == "none" => Ok(None),
            other => bail!("parameter {key}: expected a year or \"none\", got {other}"),
        }
    };
    Ok(ParamValue::Period(ClimatologyPeriod::new(
        year(start)?,
        year(end)?,
    )))
}

fn parse_series(key: &str, table: &toml::Table) -> Result<ParamValue> {
    #[derive(serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    struct SeriesToml {
        days: Vec<i64>,
        temperature: Vec<f64>,
    }
    let series: SeriesToml = toml::Value::Table(table.clone())
        .try_into()
        .with_context(|| {
            format!("parameter {key}: expected {{ days = [..], temperature = [..] }}")
        })?;
    Ok(ParamValue::Series(AlternateClimatology::new(
        series.days,
        series.temperature,
    )))
}

/// Splits a `--set KEY=VALUE` argument.
pub fn parse_set(arg: &str) -> Result<(String, ParamValue)> {
    let Some((key, value)) = arg.split_once('=') else {
        bail!("expected KEY=VALUE, got {arg:?}");
    };
    let value = value
        .parse()
        .with_context(|| format!("--set {key}: bad value {value:?}"))?;
    Ok((key.trim().to_string(), value))
}

/// Builds the parameter set: defaults, then `[params]`, then `--set` overrides.
pub fn build_params(
    table: &BTreeMap<String, toml::Value>,
    sets: &[String],
) -> Result<ParameterSet> {
    let mut params = ParameterSet::new();

    let from_file = table
        .iter()
        .map(|(k, v)| Ok((k.clone(), param_value(k, v)?)))
        .collect::<Result<Vec<_>>>()?;
    params
        .update(from_file)
        .context("invalid [params] section")?;

    let from_cli = sets
        .iter()
        .map(|s| parse_set(s))
        .collect::<Result<Vec<_>>>()?;
    params.update(from_cli).context("invalid --set override")?;

    Ok(params)
}

/// Builds a [`SynthConfig`] from the TOML synth configuration.
pub fn build_synth_config(synth: &SynthToml) -> Result<SynthConfig> {
    let cfg = SynthConfig::new()
        .with_ar_coefficient(synth.ar_coefficient)
        .with_noise_sd(synth.noise_sd)
        .with_seasonal_amplitude(synth.seasonal_amplitude)
        .with_floor(synth.floor);
    cfg.validate().context("invalid [synth] section")?;
    Ok(cfg)
}
