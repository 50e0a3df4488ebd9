use std::fmt;
use std::path::Path;

use plotters::style::RGBColor;
use serde::Deserialize;

use crate::config::{ConfigError, load_toml};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        Self::Svg
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlotColors {
    #[serde(default = "PlotColors::default_ai")]
    pub ai: String,
    #[serde(default = "PlotColors::default_abbr")]
    pub abbr: String,
    #[serde(default = "PlotColors::default_full")]
    pub full: String,
    #[serde(default = "PlotColors::default_ai_alpha")]
    pub ai_alpha: f64,
}

impl PlotColors {
    fn default_ai() -> String {
        "#2ca02c".to_string()
    }
    fn default_abbr() -> String {
        "#ff7f0e".to_string()
    }
    fn default_full() -> String {
        "#1f77b4".to_string()
    }
    fn default_ai_alpha() -> f64 {
        0.2
    }
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            ai: Self::default_ai(),
            abbr: Self::default_abbr(),
            full: Self::default_full(),
            ai_alpha: Self::default_ai_alpha(),
        }
    }
}

/// Figure styling from `plot_parameters.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotParams {
    #[serde(default = "PlotParams::default_linewidth")]
    pub linewidth: u32,
    #[serde(default = "PlotParams::default_label_size")]
    pub label_size: u32,
    #[serde(default = "PlotParams::default_legend_size")]
    pub legend_size: u32,
    #[serde(default = "PlotParams::default_tick_size")]
    pub tick_size: u32,
    #[serde(default = "PlotParams::default_recall_ylim")]
    pub recall_ylim: f64,
    #[serde(default = "PlotParams::default_time_ylim")]
    pub time_ylim: f64,
    /// Lower edge of the cut time axis; drawn as 0.
    #[serde(default = "PlotParams::default_time_false_zero")]
    pub time_false_zero: f64,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default = "PlotParams::default_width")]
    pub width: u32,
    #[serde(default = "PlotParams::default_height")]
    pub height: u32,
    #[serde(default)]
    pub colors: PlotColors,
}

impl PlotParams {
    fn default_linewidth() -> u32 {
        3
    }
    fn default_label_size() -> u32 {
        24
    }
    fn default_legend_size() -> u32 {
        20
    }
    fn default_tick_size() -> u32 {
        18
    }
    fn default_recall_ylim() -> f64 {
        0.3
    }
    fn default_time_ylim() -> f64 {
        850.0
    }
    fn default_time_false_zero() -> f64 {
        200.0
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        600
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let params: PlotParams = load_toml(path)?;
        params.validate()?;
        params.palette()?;
        Ok(params)
    }

    /// Axis limits must leave a non-empty drawing range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |param: &str, reason: String| ConfigError::InvalidRange {
            param: param.to_string(),
            reason,
        };
        if !self.recall_ylim.is_finite() || self.recall_ylim <= 0.0 {
            return Err(invalid(
                "recall_ylim",
                format!("{} must be finite and positive", self.recall_ylim),
            ));
        }
        if !self.time_ylim.is_finite() || !self.time_false_zero.is_finite() {
            return Err(invalid(
                "time_ylim",
                "time_ylim and time_false_zero must be finite".to_string(),
            ));
        }
        if self.time_false_zero >= self.time_ylim {
            return Err(invalid(
                "time_false_zero",
                format!(
                    "{} must be below time_ylim = {}",
                    self.time_false_zero, self.time_ylim
                ),
            ));
        }
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            ai: parse_hex_color(&self.colors.ai)?,
            abbr: parse_hex_color(&self.colors.abbr)?,
            full: parse_hex_color(&self.colors.full)?,
            ai_alpha: self.colors.ai_alpha,
        })
    }
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            linewidth: Self::default_linewidth(),
            label_size: Self::default_label_size(),
            legend_size: Self::default_legend_size(),
            tick_size: Self::default_tick_size(),
            recall_ylim: Self::default_recall_ylim(),
            time_ylim: Self::default_time_ylim(),
            time_false_zero: Self::default_time_false_zero(),
            format: ImageFormat::default(),
            width: Self::default_width(),
            height: Self::default_height(),
            colors: PlotColors::default(),
        }
    }
}

/// Parsed colours ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub ai: RGBColor,
    pub abbr: RGBColor,
    pub full: RGBColor,
    pub ai_alpha: f64,
}

pub fn parse_hex_color(s: &str) -> Result<RGBColor, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/plot.rs"]
mod tests;
