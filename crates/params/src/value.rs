//! Loosely-typed parameter values and the structured parameter types.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParamError;

/// Year bounds of the reference period used to build the climatology.
///
/// `None` on either side means "from the first year" / "to the last year"
/// of the baseline series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClimatologyPeriod {
    start: Option<i32>,
    end: Option<i32>,
}

impl ClimatologyPeriod {
    /// Creates a period from optional start and end years (inclusive).
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    /// The unbounded period `[None, None]`.
    pub fn full() -> Self {
        Self::default()
    }

    /// Returns the first year, if bounded.
    pub fn start(&self) -> Option<i32> {
        self.start
    }

    /// Returns the last year, if bounded.
    pub fn end(&self) -> Option<i32> {
        self.end
    }
}

impl From<[i32; 2]> for ClimatologyPeriod {
    fn from([start, end]: [i32; 2]) -> Self {
        Self::new(Some(start), Some(end))
    }
}

impl Serialize for ClimatologyPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.start, self.end).serialize(serializer)
    }
}

/// A separate `(days, temperature)` series to build the climatology from.
///
/// Carried through to the detector as-is; no ordering or length checks are
/// applied here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternateClimatology {
    days: Vec<i64>,
    temperature: Vec<f64>,
}

impl AlternateClimatology {
    /// Wraps an alternate baseline series.
    pub fn new(days: Vec<i64>, temperature: Vec<f64>) -> Self {
        Self { days, temperature }
    }

    /// Returns the ordinal days of the baseline series.
    pub fn days(&self) -> &[i64] {
        &self.days
    }

    /// Returns the temperatures of the baseline series.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }
}

/// A parameter value as supplied by a loosely-typed caller.
///
/// [`ParameterSet::update`] converts each value into the field type of its
/// key; `Disabled` stands for the "off" state of optional parameters.
///
/// [`ParameterSet::update`]: crate::ParameterSet::update
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Period(ClimatologyPeriod),
    Series(AlternateClimatology),
    Disabled,
}

impl ParamValue {
    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(v) if *v < 0 => "negative integer",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Period(_) => "period",
            Self::Series(_) => "series",
            Self::Disabled => "disabled",
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<ClimatologyPeriod> for ParamValue {
    fn from(v: ClimatologyPeriod) -> Self {
        Self::Period(v)
    }
}

impl From<AlternateClimatology> for ParamValue {
    fn from(v: AlternateClimatology) -> Self {
        Self::Series(v)
    }
}

impl FromStr for ParamValue {
    type Err = ParamError;

    /// Parses command-line text.
    ///
    /// Accepted forms: `true`/`false`, `none`/`off`/`disabled`, integers,
    /// floats, and year periods written `START..END` with either side
    /// optional (`2012..2013`, `..2013`, `..`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "true" => return Ok(Self::Bool(true)),
            "false" => return Ok(Self::Bool(false)),
            "none" | "off" | "disabled" => return Ok(Self::Disabled),
            _ => {}
        }
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        if let Ok(v) = s.parse::<f64>() {
            return Ok(Self::Float(v));
        }
        if let Some((lo, hi)) = s.split_once("..") {
            let bound = |part: &str| -> Result<Option<i32>, ParamError> {
                let part = part.trim();
                if part.is_empty() {
                    return Ok(None);
                }
                part.parse::<i32>()
                    .map(Some)
                    .map_err(|_| ParamError::Unparseable {
                        input: s.to_string(),
                    })
            };
            return Ok(Self::Period(ClimatologyPeriod::new(bound(lo)?, bound(hi)?)));
        }
        Err(ParamError::Unparseable {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scalars() {
        assert_eq!("true".parse::<ParamValue>().unwrap(), ParamValue::Bool(true));
        assert_eq!("95".parse::<ParamValue>().unwrap(), ParamValue::Int(95));
        assert_eq!("-3".parse::<ParamValue>().unwrap(), ParamValue::Int(-3));
        assert_eq!(
            "97.5".parse::<ParamValue>().unwrap(),
            ParamValue::Float(97.5)
        );
        assert_eq!("off".parse::<ParamValue>().unwrap(), ParamValue::Disabled);
    }

    #[test]
    fn parse_periods() {
        assert_eq!(
            "2012..2013".parse::<ParamValue>().unwrap(),
            ParamValue::Period(ClimatologyPeriod::from([2012, 2013]))
        );
        assert_eq!(
            "..2013".parse::<ParamValue>().unwrap(),
            ParamValue::Period(ClimatologyPeriod::new(None, Some(2013)))
        );
        assert_eq!(
            "..".parse::<ParamValue>().unwrap(),
            ParamValue::Period(ClimatologyPeriod::full())
        );
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            "abc".parse::<ParamValue>(),
            Err(ParamError::Unparseable { .. })
        ));
        assert!(matches!(
            "2012..x".parse::<ParamValue>(),
            Err(ParamError::Unparseable { .. })
        ));
    }

    #[test]
    fn kind_names() {
        assert_eq!(ParamValue::Int(-1).kind(), "negative integer");
        assert_eq!(ParamValue::Int(1).kind(), "integer");
        assert_eq!(ParamValue::Disabled.kind(), "disabled");
    }

    #[test]
    fn period_serializes_as_pair() {
        let json = serde_json::to_string(&ClimatologyPeriod::new(Some(2012), None)).unwrap();
        assert_eq!(json, "[2012,null]");
    }
}
