use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::ParameterRange;
use crate::model::bounds::{OverlapBounds, metrics_from_overlap, overlap_bounds};
use crate::model::{MetricsResult, ParameterSet, SweepParameter};
use crate::report::{ReportError, write_text};

pub const TOOL_NAME: &str = "adaptive-mri-bounds";

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub baseline: ParameterSet,
    pub baseline_metrics: MetricsResult,
    pub sweeps: Vec<SweepSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub parameter: SweepParameter,
    pub label: String,
    pub range: ParameterRange,
    pub samples: usize,
    pub data_file: String,
    pub figures: Vec<String>,
}

/// Single-point evaluation with the intermediate overlap terms.
#[derive(Debug, Clone, Serialize)]
pub struct PointReport {
    pub parameters: ParameterSet,
    pub overlap: OverlapBounds,
    pub metrics: MetricsResult,
}

impl PointReport {
    pub fn evaluate(parameters: ParameterSet) -> Self {
        let overlap = overlap_bounds(parameters.abbr(), parameters.ai(), parameters.prevalence);
        debug!(
            abbr_total = overlap.abbr_matrix.total(),
            ai_total = overlap.ai_matrix.total(),
            "confusion matrices"
        );
        let metrics = metrics_from_overlap(&overlap, parameters.full_time, parameters.abbr_time);
        Self {
            parameters,
            overlap,
            metrics,
        }
    }
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<(), ReportError> {
    write_text(path, &render_json(summary)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
