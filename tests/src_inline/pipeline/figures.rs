use super::*;
use crate::config::ParameterRange;
use crate::model::ParameterSet;
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

fn spec(name: &str, start: f64, end: f64, step: usize) -> SweepSpec {
    SweepSpec {
        name: name.to_string(),
        parameter_range: ParameterRange { start, end, step },
    }
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("amb_figures_{}_{}", std::process::id(), tag));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_figures_for_time_parameters() {
    assert_eq!(figures_for(SweepParameter::FullTime), &[FigureKind::RelativeTime]);
    assert_eq!(figures_for(SweepParameter::AbbrTime), &[FigureKind::RelativeTime]);
    assert_eq!(
        figures_for(SweepParameter::SpecificityAi),
        &[FigureKind::Recall, FigureKind::Time]
    );
}

#[test]
fn test_figure_file_name() {
    assert_eq!(
        figure_file_name(SweepParameter::Prevalence, FigureKind::Recall, ImageFormat::Svg),
        "prevalence_recall.svg"
    );
    assert_eq!(
        figure_file_name(SweepParameter::AbbrTime, FigureKind::RelativeTime, ImageFormat::Png),
        "abbr_time_time.png"
    );
}

#[test]
fn test_build_chart_uses_sweep_label() {
    let s = spec("AI model sensitivity", 0.5, 1.0, 6);
    let series = run_sweep(&baseline(), SweepParameter::SensitivityAi, &s.parameter_range);
    let params = PlotParams::default();

    let recall = build_chart(FigureKind::Recall, &series, &s, &params);
    assert_eq!(recall.x_desc, "AI model sensitivity (%)");
    assert_eq!(recall.x.len(), 6);

    let time = build_chart(FigureKind::Time, &series, &s, &params);
    assert_eq!(time.best, series.column(crate::model::Metric::AvgTimeAiBestCase));
}

#[test]
fn test_create_figures_writes_svg() {
    let s = spec("Abbreviated protocol duration", 60.0, 240.0, 4);
    let series = run_sweep(&baseline(), SweepParameter::AbbrTime, &s.parameter_range);
    let params = PlotParams::default();
    let palette = params.palette().unwrap();
    let dir = temp_dir("svg");

    let written = create_figures(&series, &s, &params, &palette, ImageFormat::Svg, &dir).unwrap();
    assert_eq!(written, vec![dir.join("abbr_time_time.svg")]);
    assert!(written[0].exists());
}

#[cfg(not(feature = "ttf"))]
#[test]
fn test_create_figures_png_needs_ttf() {
    let s = spec("Prevalence", 0.0, 1.0, 3);
    let series = run_sweep(&baseline(), SweepParameter::Prevalence, &s.parameter_range);
    let params = PlotParams::default();
    let palette = params.palette().unwrap();
    let dir = temp_dir("png");

    let err = create_figures(&series, &s, &params, &palette, ImageFormat::Png, &dir).unwrap_err();
    assert!(matches!(err, PlotError::UnsupportedFormat(ImageFormat::Png)));
}
