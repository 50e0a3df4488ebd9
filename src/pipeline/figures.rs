use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::plot::Palette;
use crate::config::{ImageFormat, PlotParams, SweepSpec};
use crate::model::SweepParameter;
use crate::pipeline::sweep::SweepSeries;
use crate::plot::recall::recall_chart;
use crate::plot::time::{relative_time_chart, time_chart};
use crate::plot::{BandChart, PlotError, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Recall,
    Time,
    RelativeTime,
}

impl FigureKind {
    fn suffix(self) -> &'static str {
        match self {
            FigureKind::Recall => "recall",
            FigureKind::Time | FigureKind::RelativeTime => "time",
        }
    }
}

/// Protocol-duration sweeps get a single relative-time figure; every other
/// parameter gets a recall and an absolute-time figure.
pub fn figures_for(param: SweepParameter) -> &'static [FigureKind] {
    if param.is_time() {
        &[FigureKind::RelativeTime]
    } else {
        &[FigureKind::Recall, FigureKind::Time]
    }
}

pub fn figure_file_name(param: SweepParameter, kind: FigureKind, format: ImageFormat) -> String {
    format!("{}_{}.{}", param, kind.suffix(), format.extension())
}

pub fn build_chart(
    kind: FigureKind,
    series: &SweepSeries,
    spec: &SweepSpec,
    params: &PlotParams,
) -> BandChart {
    match kind {
        FigureKind::Recall => recall_chart(series, &spec.name, params),
        FigureKind::Time => time_chart(series, &spec.name, params),
        FigureKind::RelativeTime => relative_time_chart(series, &spec.name),
    }
}

/// Renders every figure of one sweep into `save_dir` and returns the written
/// paths.
pub fn create_figures(
    series: &SweepSeries,
    spec: &SweepSpec,
    params: &PlotParams,
    palette: &Palette,
    format: ImageFormat,
    save_dir: &Path,
) -> Result<Vec<PathBuf>, PlotError> {
    let mut written = Vec::new();
    for &kind in figures_for(series.parameter) {
        let chart = build_chart(kind, series, spec, params);
        let path = save_dir.join(figure_file_name(series.parameter, kind, format));
        debug!(figure = ?kind, path = %path.display(), "rendering");
        render(&chart, &path, format, params, palette)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/figures.rs"]
mod tests;
