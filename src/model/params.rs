use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating point of a binary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPerformance {
    pub sensitivity: f64,
    pub specificity: f64,
}

impl ClassifierPerformance {
    pub fn new(sensitivity: f64, specificity: f64) -> Self {
        Self {
            sensitivity,
            specificity,
        }
    }
}

/// Inputs of one bounds evaluation. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub sensitivity_abbr: f64,
    pub specificity_abbr: f64,
    pub sensitivity_ai: f64,
    pub specificity_ai: f64,
    pub prevalence: f64,
    pub full_time: f64,
    pub abbr_time: f64,
}

impl ParameterSet {
    pub fn abbr(&self) -> ClassifierPerformance {
        ClassifierPerformance::new(self.sensitivity_abbr, self.specificity_abbr)
    }

    pub fn ai(&self) -> ClassifierPerformance {
        ClassifierPerformance::new(self.sensitivity_ai, self.specificity_ai)
    }

    pub fn get(&self, param: SweepParameter) -> f64 {
        match param {
            SweepParameter::SensitivityAbbr => self.sensitivity_abbr,
            SweepParameter::SpecificityAbbr => self.specificity_abbr,
            SweepParameter::SensitivityAi => self.sensitivity_ai,
            SweepParameter::SpecificityAi => self.specificity_ai,
            SweepParameter::Prevalence => self.prevalence,
            SweepParameter::FullTime => self.full_time,
            SweepParameter::AbbrTime => self.abbr_time,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with(&self, param: SweepParameter, value: f64) -> Self {
        let mut out = *self;
        let slot = match param {
            SweepParameter::SensitivityAbbr => &mut out.sensitivity_abbr,
            SweepParameter::SpecificityAbbr => &mut out.specificity_abbr,
            SweepParameter::SensitivityAi => &mut out.sensitivity_ai,
            SweepParameter::SpecificityAi => &mut out.specificity_ai,
            SweepParameter::Prevalence => &mut out.prevalence,
            SweepParameter::FullTime => &mut out.full_time,
            SweepParameter::AbbrTime => &mut out.abbr_time,
        };
        *slot = value;
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    SensitivityAbbr,
    SpecificityAbbr,
    SensitivityAi,
    SpecificityAi,
    Prevalence,
    FullTime,
    AbbrTime,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 7] = [
        SweepParameter::SensitivityAbbr,
        SweepParameter::SpecificityAbbr,
        SweepParameter::SensitivityAi,
        SweepParameter::SpecificityAi,
        SweepParameter::Prevalence,
        SweepParameter::FullTime,
        SweepParameter::AbbrTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SweepParameter::SensitivityAbbr => "sensitivity_abbr",
            SweepParameter::SpecificityAbbr => "specificity_abbr",
            SweepParameter::SensitivityAi => "sensitivity_ai",
            SweepParameter::SpecificityAi => "specificity_ai",
            SweepParameter::Prevalence => "prevalence",
            SweepParameter::FullTime => "full_time",
            SweepParameter::AbbrTime => "abbr_time",
        }
    }

    pub fn is_time(self) -> bool {
        matches!(self, SweepParameter::FullTime | SweepParameter::AbbrTime)
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter: {0}")]
pub struct UnknownParameter(pub String);

impl FromStr for SweepParameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepParameter::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownParameter(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/params.rs"]
mod tests;
