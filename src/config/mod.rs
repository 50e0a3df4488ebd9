use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub mod performance;
pub mod plot;
pub mod sweep;

pub use performance::load_performance;
pub use plot::{ImageFormat, PlotParams};
pub use sweep::{ParameterRange, SweepSpec, load_sweeps};

pub const PERFORMANCE_FILE: &str = "performance_parameters.toml";
pub const CHANGING_FILE: &str = "changing_parameters.toml";
pub const PLOT_FILE: &str = "plot_parameters.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("invalid range for {param}: {reason}")]
    InvalidRange { param: String, reason: String },
    #[error("{field} = {value} is outside {expected}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("invalid colour {0:?} (use #rrggbb)")]
    InvalidColor(String),
    #[error("invalid override {0:?} (use name=value)")]
    InvalidOverride(String),
}

/// Locations of the three configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub performance: PathBuf,
    pub changing: PathBuf,
    pub plot: PathBuf,
}

impl ConfigPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            performance: dir.join(PERFORMANCE_FILE),
            changing: dir.join(CHANGING_FILE),
            plot: dir.join(PLOT_FILE),
        }
    }
}

pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&text, path)
}

pub(crate) fn parse_toml<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/mod.rs"]
mod tests;
