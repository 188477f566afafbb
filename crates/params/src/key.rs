//! Parameter names of the fixed schema.

use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;

/// One of the twelve parameters a [`ParameterSet`] holds.
///
/// [`ParameterSet`]: crate::ParameterSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    ClimatologyPeriod,
    Pctile,
    WindowHalfWidth,
    SmoothPercentile,
    SmoothPercentileWidth,
    MinDuration,
    JoinAcrossGaps,
    MaxGap,
    MaxPadLength,
    ColdSpells,
    AlternateClimatology,
    Ly,
}

impl ParamKey {
    /// Every key of the schema, in canonical order.
    pub const ALL: [ParamKey; 12] = [
        Self::ClimatologyPeriod,
        Self::Pctile,
        Self::WindowHalfWidth,
        Self::SmoothPercentile,
        Self::SmoothPercentileWidth,
        Self::MinDuration,
        Self::JoinAcrossGaps,
        Self::MaxGap,
        Self::MaxPadLength,
        Self::ColdSpells,
        Self::AlternateClimatology,
        Self::Ly,
    ];

    /// Returns the wire name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClimatologyPeriod => "climatologyPeriod",
            Self::Pctile => "pctile",
            Self::WindowHalfWidth => "windowHalfWidth",
            Self::SmoothPercentile => "smoothPercentile",
            Self::SmoothPercentileWidth => "smoothPercentileWidth",
            Self::MinDuration => "minDuration",
            Self::JoinAcrossGaps => "joinAcrossGaps",
            Self::MaxGap => "maxGap",
            Self::MaxPadLength => "maxPadLength",
            Self::ColdSpells => "coldSpells",
            Self::AlternateClimatology => "alternateClimatology",
            Self::Ly => "Ly",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    /// Resolves a wire name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParamError::UnknownParameter {
                name: s.to_string(),
            })
    }
}
