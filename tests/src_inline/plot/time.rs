use super::*;
use crate::config::ParameterRange;
use crate::model::{ParameterSet, SweepParameter};
use crate::pipeline::sweep::run_sweep;

fn baseline() -> ParameterSet {
    ParameterSet {
        sensitivity_abbr: 0.9,
        specificity_abbr: 0.8,
        sensitivity_ai: 0.95,
        specificity_ai: 0.7,
        prevalence: 0.1,
        full_time: 300.0,
        abbr_time: 120.0,
    }
}

#[test]
fn test_time_chart_false_zero() {
    let range = ParameterRange {
        start: 0.5,
        end: 1.0,
        step: 6,
    };
    let series = run_sweep(&baseline(), SweepParameter::SpecificityAi, &range);

    let chart = time_chart(&series, "AI model specificity", &PlotParams::default());
    assert_eq!(chart.y_desc, "Average time (s)");
    assert_eq!(chart.y_axis.false_zero, Some(200.0));
    assert_eq!(chart.y_axis.hi, 850.0);
    assert_eq!(chart.y_axis.label(200.0), "0");
    assert!(chart.full.iter().all(|&v| v == 300.0));

    let params = PlotParams {
        time_false_zero: 0.0,
        ..PlotParams::default()
    };
    let chart = time_chart(&series, "AI model specificity", &params);
    assert!(chart.y_axis.false_zero.is_none());
}

#[test]
fn test_relative_time_chart_normalises_by_full() {
    let range = ParameterRange {
        start: 100.0,
        end: 500.0,
        step: 5,
    };
    let series = run_sweep(&baseline(), SweepParameter::FullTime, &range);

    let chart = relative_time_chart(&series, "Full protocol duration");
    assert_eq!(chart.x_desc, "Full protocol duration (s)");
    assert!(chart.full.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    for (i, &full) in series.values.iter().enumerate() {
        let expected = series.rows[i].avg_time_abbr / full;
        assert!((chart.abbr[i] - expected).abs() < 1e-12);
        assert!(chart.best[i] <= chart.worst[i]);
    }
    assert_eq!(chart.y_axis.lo, RELATIVE_FALSE_ZERO);
    assert_eq!(chart.y_axis.hi, RELATIVE_YLIM);
    assert_eq!(chart.y_axis.label(RELATIVE_FALSE_ZERO), "0");
    assert_eq!(chart.y_axis.label(0.5), "50");
}
