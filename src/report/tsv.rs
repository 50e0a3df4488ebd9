use std::path::Path;

use crate::model::Metric;
use crate::pipeline::sweep::SweepSeries;
use crate::report::{ReportError, format_f64_6, write_text};

pub fn sweep_file_name(series: &SweepSeries) -> String {
    format!("{}_sweep.tsv", series.parameter)
}

/// One row per sample: the swept value followed by the eight metrics.
pub fn render_sweep_tsv(series: &SweepSeries) -> String {
    let mut out = String::new();
    let mut header = vec![series.parameter.as_str()];
    header.extend(Metric::ALL.iter().map(|m| m.as_str()));
    out.push_str(&header.join("\t"));
    out.push('\n');

    for (x, row) in series.values.iter().zip(&series.rows) {
        let mut fields = Vec::with_capacity(Metric::ALL.len() + 1);
        fields.push(format_f64_6(*x));
        fields.extend(Metric::ALL.iter().map(|&m| format_f64_6(row.get(m))));
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}

pub fn write_sweep_tsv(series: &SweepSeries, path: &Path) -> Result<(), ReportError> {
    write_text(path, &render_sweep_tsv(series))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
