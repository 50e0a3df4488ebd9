use super::*;
use crate::model::compute_protocol_bounds;

fn params() -> ParameterSet {
    ParameterSet {
        sensitivity_abbr: 0.8,
        specificity_abbr: 0.9,
        sensitivity_ai: 0.9,
        specificity_ai: 0.8,
        prevalence: 0.1,
        full_time: 600.0,
        abbr_time: 120.0,
    }
}

#[test]
fn test_point_report_matches_protocol_bounds() {
    let report = PointReport::evaluate(params());
    assert_eq!(report.metrics, compute_protocol_bounds(&params()));
    assert!(report.overlap.best.tp >= report.overlap.worst.tp);
    assert!(report.overlap.best.fp >= report.overlap.worst.fp);
}

#[test]
fn test_point_report_json_fields() {
    let text = render_json(&PointReport::evaluate(params())).unwrap();
    assert!(text.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["parameters"]["prevalence"], 0.1);
    assert!(value["overlap"]["abbr_matrix"]["fn"].is_number());
    assert!(value["overlap"]["best"]["need_tp"].is_number());
    assert_eq!(value["metrics"]["recall_full"], 0.0);
    assert_eq!(value["metrics"]["avg_time_full"], 600.0);
}

#[test]
fn test_write_summary_json() {
    let dir = std::env::temp_dir().join(format!("amb_json_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let summary = RunSummary {
        tool: TOOL_NAME,
        version: "0.0.0",
        baseline: params(),
        baseline_metrics: compute_protocol_bounds(&params()),
        sweeps: vec![SweepSummary {
            parameter: SweepParameter::AbbrTime,
            label: "Abbreviated protocol duration".to_string(),
            range: ParameterRange {
                start: 60.0,
                end: 240.0,
                step: 4,
            },
            samples: 4,
            data_file: "abbr_time_sweep.tsv".to_string(),
            figures: vec!["abbr_time_time.svg".to_string()],
        }],
    };
    let path = dir.join("summary.json");
    write_summary_json(&summary, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["tool"], TOOL_NAME);
    assert_eq!(value["sweeps"][0]["parameter"], "abbr_time");
    assert_eq!(value["sweeps"][0]["range"]["step"], 4);
    assert_eq!(value["sweeps"][0]["figures"][0], "abbr_time_time.svg");
}
