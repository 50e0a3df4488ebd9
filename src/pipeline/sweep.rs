use crate::config::ParameterRange;
use crate::model::{Metric, MetricsResult, ParameterSet, SweepParameter, compute_protocol_bounds};

/// Evaluations of one parameter sweep, in sample order.
#[derive(Debug, Clone)]
pub struct SweepSeries {
    pub parameter: SweepParameter,
    pub values: Vec<f64>,
    pub rows: Vec<MetricsResult>,
}

impl SweepSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn column(&self, metric: Metric) -> Vec<f64> {
        self.rows.iter().map(|m| m.get(metric)).collect()
    }
}

/// Evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

pub fn run_sweep(
    baseline: &ParameterSet,
    parameter: SweepParameter,
    range: &ParameterRange,
) -> SweepSeries {
    let values = linspace(range.start, range.end, range.step);
    let rows = values
        .iter()
        .map(|&x| compute_protocol_bounds(&baseline.with(parameter, x)))
        .collect();
    SweepSeries {
        parameter,
        values,
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sweep.rs"]
mod tests;
