use mhw_params::{ClimatologyPeriod, ParamError, ParamKey, ParamValue, ParameterSet};

#[test]
fn unknown_key_rejected_regardless_of_value() {
    let values = [
        ParamValue::Int(95),
        ParamValue::Float(95.0),
        ParamValue::Bool(true),
        ParamValue::Disabled,
    ];
    for value in values {
        let mut params = ParameterSet::new();
        let err = params.update([("pctlie", value)]).unwrap_err();
        assert_eq!(
            err,
            ParamError::UnknownParameter {
                name: "pctlie".to_string()
            }
        );
        assert_eq!(params, ParameterSet::new());
    }
}

#[test]
fn known_key_overwrites() {
    let mut params = ParameterSet::new();
    params.update([("pctile", ParamValue::Int(95))]).unwrap();
    assert_eq!(params.pctile(), 95.0);
    // untouched keys keep their defaults
    assert_eq!(params.min_duration(), 5);
}

#[test]
fn batch_update_of_several_keys() {
    let mut params = ParameterSet::new();
    params
        .update([
            (
                "climatologyPeriod",
                ParamValue::Period(ClimatologyPeriod::from([2012, 2013])),
            ),
            ("pctile", ParamValue::Int(95)),
            ("coldSpells", ParamValue::Bool(true)),
            ("maxPadLength", ParamValue::Int(3)),
        ])
        .unwrap();
    assert_eq!(params.climatology_period(), ClimatologyPeriod::from([2012, 2013]));
    assert_eq!(params.pctile(), 95.0);
    assert!(params.cold_spells());
    assert_eq!(params.max_pad_length(), Some(3));
}

#[test]
fn failed_batch_leaves_set_unchanged() {
    let mut params = ParameterSet::new().with_min_duration(3);
    let before = params.clone();

    // First entry is valid; the unknown second one must veto it.
    let err = params
        .update([
            ("pctile", ParamValue::Int(99)),
            ("maxgap", ParamValue::Int(4)),
        ])
        .unwrap_err();
    assert!(matches!(err, ParamError::UnknownParameter { .. }));
    assert_eq!(params, before);

    let err = params
        .update([
            ("pctile", ParamValue::Int(99)),
            ("smoothPercentile", ParamValue::Int(1)),
        ])
        .unwrap_err();
    assert!(matches!(
        err,
        ParamError::TypeMismatch {
            key: "smoothPercentile",
            ..
        }
    ));
    assert_eq!(params, before);
}

#[test]
fn values_are_not_range_checked() {
    let mut params = ParameterSet::new();
    params
        .update([
            ("pctile", ParamValue::Float(150.0)),
            ("minDuration", ParamValue::Int(0)),
        ])
        .unwrap();
    assert_eq!(params.pctile(), 150.0);
    assert_eq!(params.min_duration(), 0);
}

#[test]
fn with_overrides_starts_from_defaults() {
    let params = ParameterSet::with_overrides([("Ly", ParamValue::Bool(true))]).unwrap();
    assert_eq!(params, ParameterSet::new().with_ly(true));

    let err = ParameterSet::with_overrides([("ly", ParamValue::Bool(true))]).unwrap_err();
    assert!(matches!(err, ParamError::UnknownParameter { .. }));
}

#[test]
fn string_keys_from_command_line() {
    let mut params = ParameterSet::new();
    let pairs: Vec<(String, ParamValue)> = ["windowHalfWidth=7", "climatologyPeriod=2012..2013"]
        .iter()
        .map(|s| {
            let (k, v) = s.split_once('=').unwrap();
            (k.to_string(), v.parse().unwrap())
        })
        .collect();
    params.update(pairs).unwrap();
    assert_eq!(params.window_half_width(), 7);
    assert_eq!(
        params.get(ParamKey::ClimatologyPeriod),
        ParamValue::Period(ClimatologyPeriod::from([2012, 2013]))
    );
}

#[test]
fn unknown_name_reported_before_bad_value() {
    let mut params = ParameterSet::new();
    let err = params
        .update([
            ("pctile", ParamValue::Bool(true)),
            ("pctlie", ParamValue::Int(95)),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        ParamError::UnknownParameter {
            name: "pctlie".to_string()
        }
    );
    assert_eq!(params, ParameterSet::new());
}
