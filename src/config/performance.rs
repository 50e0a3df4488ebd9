use std::path::Path;

use crate::config::{ConfigError, load_toml};
use crate::model::{ParameterSet, SweepParameter};

/// Baseline parameter set. Keys the model does not use (for example
/// `sensitivity_full`) are ignored; missing keys are parse errors.
pub fn load_performance(path: &Path) -> Result<ParameterSet, ConfigError> {
    let params: ParameterSet = load_toml(path)?;
    validate(&params)?;
    Ok(params)
}

pub fn validate(params: &ParameterSet) -> Result<(), ConfigError> {
    for param in SweepParameter::ALL {
        check_value(param, params.get(param))?;
    }
    Ok(())
}

pub fn check_value(param: SweepParameter, value: f64) -> Result<(), ConfigError> {
    let ok = if param.is_time() {
        value.is_finite() && value >= 0.0
    } else {
        (0.0..=1.0).contains(&value)
    };
    if ok {
        return Ok(());
    }
    Err(ConfigError::OutOfRange {
        field: param.as_str(),
        value,
        expected: if param.is_time() {
            "[0, inf) seconds"
        } else {
            "[0, 1]"
        },
    })
}

/// Applies `name=value` overrides in order and re-validates.
pub fn apply_overrides(
    base: ParameterSet,
    overrides: &[String],
) -> Result<ParameterSet, ConfigError> {
    let mut out = base;
    for item in overrides {
        let (name, value) = item
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidOverride(item.clone()))?;
        let param: SweepParameter = name
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownParameter(name.trim().to_string()))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidOverride(item.clone()))?;
        check_value(param, value)?;
        out = out.with(param, value);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/performance.rs"]
mod tests;
