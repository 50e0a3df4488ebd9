use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, load_toml};
use crate::model::SweepParameter;

/// Sampling range of a swept parameter. `step` is the number of samples,
/// endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub start: f64,
    pub end: f64,
    pub step: usize,
}

/// One `[<parameter>]` table of `changing_parameters.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Axis label.
    pub name: String,
    pub parameter_range: ParameterRange,
}

pub fn load_sweeps(path: &Path) -> Result<Vec<(SweepParameter, SweepSpec)>, ConfigError> {
    let raw: BTreeMap<String, SweepSpec> = load_toml(path)?;
    resolve(raw)
}

pub(crate) fn resolve(
    raw: BTreeMap<String, SweepSpec>,
) -> Result<Vec<(SweepParameter, SweepSpec)>, ConfigError> {
    let mut out = Vec::with_capacity(raw.len());
    for (key, spec) in raw {
        let param: SweepParameter = key
            .parse()
            .map_err(|_| ConfigError::UnknownParameter(key.clone()))?;
        validate_range(param, &spec.parameter_range)?;
        out.push((param, spec));
    }
    Ok(out)
}

fn validate_range(param: SweepParameter, range: &ParameterRange) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidRange {
        param: param.to_string(),
        reason: reason.to_string(),
    };
    if range.step == 0 {
        return Err(invalid("step must be at least 1"));
    }
    if !range.start.is_finite() || !range.end.is_finite() {
        return Err(invalid("start and end must be finite"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/sweep.rs"]
mod tests;
