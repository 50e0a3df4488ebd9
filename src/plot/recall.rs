use crate::config::PlotParams;
use crate::model::Metric;
use crate::pipeline::sweep::SweepSeries;
use crate::plot::BandChart;
use crate::plot::style::{AxisSpec, x_extent};

/// Keeps the zero-recall full-protocol line visible above the x axis.
pub const FULL_LINE_OFFSET: f64 = 0.0002;

pub fn recall_chart(series: &SweepSeries, label: &str, params: &PlotParams) -> BandChart {
    let (lo, hi) = x_extent(&series.values);
    BandChart {
        x_desc: format!("{label} (%)"),
        y_desc: "Recall Rate (%)".to_string(),
        x: series.values.clone(),
        best: series.column(Metric::RecallAiBestCase),
        worst: series.column(Metric::RecallAiWorstCase),
        abbr: series.column(Metric::RecallAbbr),
        full: series
            .column(Metric::RecallFull)
            .into_iter()
            .map(|r| r + FULL_LINE_OFFSET)
            .collect(),
        x_axis: AxisSpec::linear(lo, hi, 0.2, 0.1, 100.0),
        y_axis: AxisSpec::linear(0.0, params.recall_ylim, 0.05, 0.025, 100.0),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/recall.rs"]
mod tests;
