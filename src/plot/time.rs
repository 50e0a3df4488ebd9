use crate::config::PlotParams;
use crate::model::Metric;
use crate::pipeline::sweep::SweepSeries;
use crate::plot::BandChart;
use crate::plot::style::{AxisSpec, x_extent};

pub const RELATIVE_FALSE_ZERO: f64 = 0.15;
pub const RELATIVE_YLIM: f64 = 1.05;

/// Average protocol time in seconds against a rate parameter.
pub fn time_chart(series: &SweepSeries, label: &str, params: &PlotParams) -> BandChart {
    let (lo, hi) = x_extent(&series.values);
    let y_lo = params.time_false_zero.min(params.time_ylim);
    let mut y_axis = AxisSpec::linear(y_lo, params.time_ylim, 100.0, 50.0, 1.0);
    if y_lo > 0.0 {
        y_axis = y_axis.with_false_zero(10.0);
    }
    BandChart {
        x_desc: format!("{label} (%)"),
        y_desc: "Average time (s)".to_string(),
        x: series.values.clone(),
        best: series.column(Metric::AvgTimeAiBestCase),
        worst: series.column(Metric::AvgTimeAiWorstCase),
        abbr: series.column(Metric::AvgTimeAbbr),
        full: series.column(Metric::AvgTimeFull),
        x_axis: AxisSpec::linear(lo, hi, 0.2, 0.1, 100.0),
        y_axis,
    }
}

/// Average protocol time as a fraction of the full-protocol time, against a
/// protocol duration in seconds. A zero full-protocol time yields non-finite
/// points, which are not drawn.
pub fn relative_time_chart(series: &SweepSeries, label: &str) -> BandChart {
    let (lo, hi) = x_extent(&series.values);
    let full = series.column(Metric::AvgTimeFull);
    let relative = |metric: Metric| -> Vec<f64> {
        series
            .column(metric)
            .into_iter()
            .zip(&full)
            .map(|(t, f)| t / f)
            .collect()
    };
    BandChart {
        x_desc: format!("{label} (s)"),
        y_desc: "Average time (% of full protocol duration)".to_string(),
        x: series.values.clone(),
        best: relative(Metric::AvgTimeAiBestCase),
        worst: relative(Metric::AvgTimeAiWorstCase),
        abbr: relative(Metric::AvgTimeAbbr),
        full: relative(Metric::AvgTimeFull),
        x_axis: AxisSpec::linear(lo, hi, 100.0, 25.0, 1.0),
        y_axis: AxisSpec::linear(RELATIVE_FALSE_ZERO, RELATIVE_YLIM, 0.1, 0.05, 100.0)
            .with_false_zero(0.01),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/time.rs"]
mod tests;
